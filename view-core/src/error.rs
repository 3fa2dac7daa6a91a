use thiserror::Error;

/// Failure reported by an API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}")]
    Http { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn http(status: u16, message: Option<String>) -> Self {
        Self::Http { status, message }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// User-presentable message carried by the error. Blank messages count as none.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            Self::Network(msg) | Self::Decode(msg) => Some(msg.as_str()),
            Self::Http { message, .. } => message.as_deref(),
        };
        message.map(str::trim).filter(|m| !m.is_empty())
    }
}
