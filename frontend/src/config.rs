/// Build-time configuration.
///
/// Values come from environment variables present when the wasm bundle is
/// compiled (e.g. `API_BASE_URL=https://example.org/api trunk build`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub toast_duration_ms: u32,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("API_BASE_URL"), option_env!("TOAST_DURATION_MS"))
    }

    fn from_values(api_base_url: Option<&str>, toast_duration_ms: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            toast_duration_ms: toast_duration_ms
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        }
    }
}
