// src/modules/meeting/application/ports/outgoing/meeting_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::application::domain::entities::MeetingStatus;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateMeetingData {
    pub organizer: UserId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Stored as JSONB in DB (ordered array of user ids)
    pub participants: Vec<Uuid>,
    pub status: MeetingStatus,
}

/// Whitelisted mutable fields. `None` keeps the stored value.
///
/// Organizer and the soft-delete flag are deliberately absent: ownership
/// never changes after creation and deletion goes through `soft_delete_meeting`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateMeetingData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub participants: Option<Vec<Uuid>>,
    pub status: Option<MeetingStatus>,
}

/// Un-expanded stored meeting (references are plain ids).
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRecord {
    pub id: Uuid,
    pub organizer: UserId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub participants: Vec<Uuid>,
    pub status: MeetingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MeetingRecord {
    pub fn is_organized_by(&self, user: UserId) -> bool {
        self.organizer == user
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum MeetingRepositoryError {
    /// Meeting doesn't exist OR is soft-deleted.
    #[error("Meeting not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, meetings table only, never hard-deletes)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    async fn create_meeting(
        &self,
        data: CreateMeetingData,
    ) -> Result<MeetingRecord, MeetingRepositoryError>;

    /// Non-deleted meeting by id.
    async fn find_active(&self, meeting_id: Uuid) -> Result<MeetingRecord, MeetingRepositoryError>;

    /// Applies the present fields and refreshes `updated_at`.
    /// A meeting soft-deleted since it was read yields `NotFound`.
    async fn update_meeting(
        &self,
        meeting_id: Uuid,
        data: UpdateMeetingData,
    ) -> Result<MeetingRecord, MeetingRepositoryError>;

    async fn soft_delete_meeting(&self, meeting_id: Uuid) -> Result<(), MeetingRepositoryError>;
}
