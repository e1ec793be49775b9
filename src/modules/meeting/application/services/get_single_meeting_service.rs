use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::meeting::application::ports::incoming::use_cases::{
    GetSingleMeetingError, GetSingleMeetingUseCase,
};
use crate::modules::meeting::application::ports::outgoing::{MeetingQuery, MeetingView};

pub struct GetSingleMeetingService<Q>
where
    Q: MeetingQuery,
{
    query: Q,
}

impl<Q> GetSingleMeetingService<Q>
where
    Q: MeetingQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleMeetingUseCase for GetSingleMeetingService<Q>
where
    Q: MeetingQuery + Send + Sync,
{
    async fn execute(&self, meeting_id: Uuid) -> Result<MeetingView, GetSingleMeetingError> {
        self.query
            .get_by_id(meeting_id)
            .await
            .map_err(GetSingleMeetingError::from)
    }
}
