// src/modules/meeting/application/ports/outgoing/meeting_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::meeting::application::domain::entities::MeetingStatus;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Selected public fields of a referenced user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    #[schema(example = "jdoe")]
    pub username: String,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
}

/// Meeting with organizer and participants expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingView {
    pub id: Uuid,
    #[schema(example = "Sync")]
    pub title: String,
    #[schema(example = "Weekly")]
    pub description: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "11:00:00")]
    pub end_time: NaiveTime,
    pub participants: Vec<UserSummary>,
    pub organizer: UserSummary,
    pub status: MeetingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// All bounds are optional; date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingListFilter {
    pub status: Option<MeetingStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum MeetingQueryError {
    #[error("Meeting not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, joins users for reference expansion)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MeetingQuery: Send + Sync {
    /// Non-deleted meeting by id, expanded.
    async fn get_by_id(&self, meeting_id: Uuid) -> Result<MeetingView, MeetingQueryError>;

    /// Non-deleted meetings matching `filter`, expanded, ordered by
    /// `(date, start_time)` ascending.
    async fn list(&self, filter: MeetingListFilter) -> Result<Vec<MeetingView>, MeetingQueryError>;
}
