use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::application::ports::incoming::use_cases::{
    CreateMeetingError, CreateMeetingUseCase, GetMeetingsError, GetMeetingsUseCase,
    GetSingleMeetingError, GetSingleMeetingUseCase, MeetingDraft, MeetingPatch,
    SoftDeleteMeetingError, SoftDeleteMeetingUseCase, UpdateMeetingError, UpdateMeetingUseCase,
};
use crate::modules::meeting::application::ports::outgoing::{MeetingListFilter, MeetingView};

#[derive(Default, Clone)]
pub struct StubCreateMeetingUseCase;

#[async_trait]
impl CreateMeetingUseCase for StubCreateMeetingUseCase {
    async fn execute(
        &self,
        _organizer: UserId,
        _draft: MeetingDraft,
    ) -> Result<MeetingView, CreateMeetingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMeetingsUseCase;

#[async_trait]
impl GetMeetingsUseCase for StubGetMeetingsUseCase {
    async fn execute(
        &self,
        _filter: MeetingListFilter,
    ) -> Result<Vec<MeetingView>, GetMeetingsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleMeetingUseCase;

#[async_trait]
impl GetSingleMeetingUseCase for StubGetSingleMeetingUseCase {
    async fn execute(&self, _meeting_id: Uuid) -> Result<MeetingView, GetSingleMeetingError> {
        Err(GetSingleMeetingError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateMeetingUseCase;

#[async_trait]
impl UpdateMeetingUseCase for StubUpdateMeetingUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _meeting_id: Uuid,
        _patch: MeetingPatch,
    ) -> Result<MeetingView, UpdateMeetingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteMeetingUseCase;

#[async_trait]
impl SoftDeleteMeetingUseCase for StubSoftDeleteMeetingUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _meeting_id: Uuid,
    ) -> Result<(), SoftDeleteMeetingError> {
        unimplemented!("Not used in this test")
    }
}
