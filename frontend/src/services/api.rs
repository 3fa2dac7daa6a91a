use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use shared::api::{ErrorResponse, VerifyParticipantEmailRequest};
use shared::models::CalendarSummary;
use view_core::{AdminApi, ApiError, NotificationApi};

use crate::config::AppConfig;
use crate::session::BrowserSession;

/// HTTP client for the calendar backend.
pub struct ApiService {
    base_url: String,
    session: BrowserSession,
}

impl ApiService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            session: BrowserSession,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

fn user_calendars_url(base_url: &str, user_id: &str) -> String {
    format!(
        "{}/admin/users/{}/calendars",
        base_url,
        urlencoding::encode(user_id)
    )
}

fn verify_email_url(base_url: &str) -> String {
    format!("{}/notifications/participants/verify-email", base_url)
}

/// Turns a non-2xx response into an error, keeping the server's message if it sent one.
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.message);

    Err(ApiError::http(status, message))
}

#[async_trait(?Send)]
impl AdminApi for ApiService {
    async fn user_calendars(&self, user_id: &str) -> Result<Vec<CalendarSummary>, ApiError> {
        let url = user_calendars_url(&self.base_url, user_id);

        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl NotificationApi for ApiService {
    async fn verify_participant_email(
        &self,
        request: &VerifyParticipantEmailRequest,
    ) -> Result<(), ApiError> {
        let url = verify_email_url(&self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(response).await.map(|_| ())
    }
}
