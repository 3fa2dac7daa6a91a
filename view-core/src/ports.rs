//! Collaborator interfaces consumed by the view controllers.

use async_trait::async_trait;
use shared::api::VerifyParticipantEmailRequest;
use shared::models::CalendarSummary;
use uuid::Uuid;

use crate::error::ApiError;
use crate::messages::MessageKey;

/// Admin side of the backend API.
#[async_trait(?Send)]
pub trait AdminApi {
    /// Calendars owned by a user, participants included, in server order.
    async fn user_calendars(&self, user_id: &str) -> Result<Vec<CalendarSummary>, ApiError>;
}

/// Participant notification side of the backend API.
#[async_trait(?Send)]
pub trait NotificationApi {
    async fn verify_participant_email(
        &self,
        request: &VerifyParticipantEmailRequest,
    ) -> Result<(), ApiError>;
}

/// Places a view can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Home,
    AdminHome,
    AdminCalendarEdit { calendar_id: Uuid },
    PublicCalendar { token: String },
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Home => "/".to_string(),
            Destination::AdminHome => "/admin".to_string(),
            Destination::AdminCalendarEdit { calendar_id } => {
                format!("/admin/calendars/{}/edit", calendar_id)
            }
            Destination::PublicCalendar { token } => format!("/c/{}", token),
        }
    }
}

pub trait Router {
    fn route_param(&self, name: &str) -> Option<String>;
    fn query_param(&self, name: &str) -> Option<String>;
    fn navigate(&self, to: Destination);

    /// Route parameter with surrounding whitespace removed; blank counts as absent.
    fn required_param(&self, name: &str) -> Option<String> {
        non_blank(self.route_param(name))
    }

    /// Query parameter with surrounding whitespace removed; blank counts as absent.
    fn optional_query(&self, name: &str) -> Option<String> {
        non_blank(self.query_param(name))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Transient user-visible notifications.
pub trait Toasts {
    fn error(&self, message: String);
}

pub trait Translator {
    fn translate(&self, key: MessageKey, params: &[(&str, String)]) -> String;
}

/// Viewer preferences held by the session/auth store.
pub trait Session {
    fn locale(&self) -> Option<String>;
}
