use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::application::domain::entities::{
    MeetingStatus, MeetingValidationError,
};
use crate::modules::meeting::application::ports::outgoing::MeetingView;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Unvalidated update input. Only these fields can ever change;
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct MeetingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub participants: Option<Vec<Uuid>>,
    pub status: Option<MeetingStatus>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateMeetingError {
    #[error(transparent)]
    Validation(#[from] MeetingValidationError),

    #[error("Meeting not found")]
    NotFound,

    #[error("Only the organizer can update the meeting")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateMeetingUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        meeting_id: Uuid,
        patch: MeetingPatch,
    ) -> Result<MeetingView, UpdateMeetingError>;
}
