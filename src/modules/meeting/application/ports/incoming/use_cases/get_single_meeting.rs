use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::meeting::application::ports::outgoing::{MeetingQueryError, MeetingView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleMeetingError {
    #[error("Meeting not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MeetingQueryError> for GetSingleMeetingError {
    fn from(err: MeetingQueryError) -> Self {
        match err {
            MeetingQueryError::NotFound => GetSingleMeetingError::NotFound,
            MeetingQueryError::DatabaseError(msg) | MeetingQueryError::SerializationError(msg) => {
                GetSingleMeetingError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetSingleMeetingUseCase: Send + Sync {
    async fn execute(&self, meeting_id: Uuid) -> Result<MeetingView, GetSingleMeetingError>;
}
