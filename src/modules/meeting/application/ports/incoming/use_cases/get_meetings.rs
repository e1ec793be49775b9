use async_trait::async_trait;

use crate::modules::meeting::application::ports::outgoing::{
    MeetingListFilter, MeetingQueryError, MeetingView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMeetingsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<MeetingQueryError> for GetMeetingsError {
    fn from(err: MeetingQueryError) -> Self {
        GetMeetingsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetMeetingsUseCase: Send + Sync {
    async fn execute(&self, filter: MeetingListFilter)
        -> Result<Vec<MeetingView>, GetMeetingsError>;
}
