use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeleteMeetingError {
    #[error("Meeting not found")]
    NotFound,

    #[error("Only the organizer can delete the meeting")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SoftDeleteMeetingUseCase: Send + Sync {
    async fn execute(&self, requester: UserId, meeting_id: Uuid)
        -> Result<(), SoftDeleteMeetingError>;
}
