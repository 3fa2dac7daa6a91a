use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar participant as shown on admin summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
}

/// Read-only projection of a calendar and its participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    pub threshold: u32,
    pub created_at: DateTime<Utc>,
    pub public_token: String,
}

impl CalendarSummary {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Path of the public, token-addressed calendar page.
    pub fn public_path(&self) -> String {
        format!("/c/{}", self.public_token)
    }
}
