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

/// Unvalidated creation input as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct MeetingDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub participants: Vec<Uuid>,
    pub status: Option<MeetingStatus>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateMeetingError {
    #[error(transparent)]
    Validation(#[from] MeetingValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateMeetingUseCase: Send + Sync {
    /// `organizer` is always the authenticated caller.
    async fn execute(
        &self,
        organizer: UserId,
        draft: MeetingDraft,
    ) -> Result<MeetingView, CreateMeetingError>;
}
