use async_trait::async_trait;

use crate::modules::meeting::application::ports::incoming::use_cases::{
    GetMeetingsError, GetMeetingsUseCase,
};
use crate::modules::meeting::application::ports::outgoing::{
    MeetingListFilter, MeetingQuery, MeetingView,
};

pub struct GetMeetingsService<Q>
where
    Q: MeetingQuery,
{
    query: Q,
}

impl<Q> GetMeetingsService<Q>
where
    Q: MeetingQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMeetingsUseCase for GetMeetingsService<Q>
where
    Q: MeetingQuery + Send + Sync,
{
    async fn execute(&self, filter: MeetingListFilter) -> Result<Vec<MeetingView>, GetMeetingsError> {
        self.query.list(filter).await.map_err(GetMeetingsError::from)
    }
}
