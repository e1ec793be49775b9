use actix_web::web;
use std::sync::Arc;

use crate::modules::meeting::application::meeting_use_cases::MeetingUseCases;
use crate::modules::meeting::application::ports::incoming::use_cases::{
    CreateMeetingUseCase, GetMeetingsUseCase, GetSingleMeetingUseCase, SoftDeleteMeetingUseCase,
    UpdateMeetingUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Starts from stubs; each test swaps in the one use case it exercises.
pub struct TestAppStateBuilder {
    meeting: MeetingUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            meeting: MeetingUseCases {
                create: Arc::new(StubCreateMeetingUseCase),
                get_list: Arc::new(StubGetMeetingsUseCase),
                get_single: Arc::new(StubGetSingleMeetingUseCase),
                update: Arc::new(StubUpdateMeetingUseCase),
                soft_delete: Arc::new(StubSoftDeleteMeetingUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_meeting_use_case(
        mut self,
        use_case: impl CreateMeetingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.meeting.create = Arc::new(use_case);
        self
    }

    pub fn with_get_meetings_use_case(
        mut self,
        use_case: impl GetMeetingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.meeting.get_list = Arc::new(use_case);
        self
    }

    pub fn with_get_single_meeting_use_case(
        mut self,
        use_case: impl GetSingleMeetingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.meeting.get_single = Arc::new(use_case);
        self
    }

    pub fn with_update_meeting_use_case(
        mut self,
        use_case: impl UpdateMeetingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.meeting.update = Arc::new(use_case);
        self
    }

    pub fn with_soft_delete_meeting_use_case(
        mut self,
        use_case: impl SoftDeleteMeetingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.meeting.soft_delete = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            meeting: self.meeting,
        })
    }
}
