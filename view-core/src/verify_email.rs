//! Participant email verification landing page logic.

use std::rc::Rc;

use shared::api::VerifyParticipantEmailRequest;
use validator::Validate;

use crate::activation::Activation;
use crate::error::ApiError;
use crate::messages::MessageKey;
use crate::ports::{NotificationApi, Router, Translator};

pub const TOKEN_PARAM: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No usable token in the link.
    InvalidToken,
    /// The server rejected the token (HTTP 400 or 404).
    ExpiredOrInvalid,
    Generic,
}

impl FailureReason {
    pub fn from_error(error: &ApiError) -> Self {
        match error.status() {
            Some(400) | Some(404) => FailureReason::ExpiredOrInvalid,
            _ => FailureReason::Generic,
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            FailureReason::InvalidToken => MessageKey::VerifyEmailInvalidToken,
            FailureReason::ExpiredOrInvalid => MessageKey::VerifyEmailExpired,
            FailureReason::Generic => MessageKey::VerifyEmailError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Pending,
    Verified,
    Failed(FailureReason),
}

impl VerificationOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, VerificationOutcome::Pending)
    }

    pub fn message(&self, translator: &dyn Translator) -> String {
        let key = match self {
            VerificationOutcome::Pending => MessageKey::VerifyEmailPending,
            VerificationOutcome::Verified => MessageKey::VerifyEmailSuccess,
            VerificationOutcome::Failed(reason) => reason.message_key(),
        };
        translator.translate(key, &[])
    }
}

/// Submits the token from the current route exactly once.
pub struct EmailVerifier {
    api: Rc<dyn NotificationApi>,
    router: Rc<dyn Router>,
}

impl EmailVerifier {
    pub fn new(api: Rc<dyn NotificationApi>, router: Rc<dyn Router>) -> Self {
        Self { api, router }
    }

    /// Returns the terminal outcome, or `None` if the activation was disposed
    /// before the server answered.
    pub async fn run(self, activation: &Activation) -> Option<VerificationOutcome> {
        let Some(token) = self.router.required_param(TOKEN_PARAM) else {
            tracing::warn!("Verification link has no token");
            return Some(VerificationOutcome::Failed(FailureReason::InvalidToken));
        };

        let request = VerifyParticipantEmailRequest::new(token);
        if let Err(errors) = request.validate() {
            tracing::warn!("Rejecting verification token: {}", errors);
            return Some(VerificationOutcome::Failed(FailureReason::InvalidToken));
        }

        tracing::info!("Verifying participant email");
        let result = self.api.verify_participant_email(&request).await;

        if !activation.is_live() {
            tracing::debug!("Verification finished after the view was closed, dropping");
            return None;
        }

        Some(match result {
            Ok(()) => {
                tracing::info!("Participant email verified");
                VerificationOutcome::Verified
            }
            Err(e) => {
                let reason = FailureReason::from_error(&e);
                tracing::warn!(?reason, "Participant email verification failed: {}", e);
                VerificationOutcome::Failed(reason)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_by_status() {
        assert_eq!(
            FailureReason::from_error(&ApiError::http(400, None)),
            FailureReason::ExpiredOrInvalid
        );
        assert_eq!(
            FailureReason::from_error(&ApiError::http(404, Some("gone".into()))),
            FailureReason::ExpiredOrInvalid
        );
        for status in [401, 403, 409, 422, 500, 502, 503] {
            assert_eq!(
                FailureReason::from_error(&ApiError::http(status, None)),
                FailureReason::Generic,
                "status {}",
                status
            );
        }
    }

    #[test]
    fn test_classification_without_status() {
        assert_eq!(
            FailureReason::from_error(&ApiError::Network("timeout".into())),
            FailureReason::Generic
        );
        assert_eq!(
            FailureReason::from_error(&ApiError::Decode("unexpected token".into())),
            FailureReason::Generic
        );
    }

    #[test]
    fn test_only_pending_is_loading() {
        assert!(VerificationOutcome::Pending.is_loading());
        assert!(!VerificationOutcome::Verified.is_loading());
        assert!(!VerificationOutcome::Failed(FailureReason::Generic).is_loading());
    }
}
