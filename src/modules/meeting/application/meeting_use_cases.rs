use std::sync::Arc;

use crate::modules::meeting::application::ports::incoming::use_cases::{
    CreateMeetingUseCase, GetMeetingsUseCase, GetSingleMeetingUseCase, SoftDeleteMeetingUseCase,
    UpdateMeetingUseCase,
};

#[derive(Clone)]
pub struct MeetingUseCases {
    pub create: Arc<dyn CreateMeetingUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetMeetingsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleMeetingUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateMeetingUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteMeetingUseCase + Send + Sync>,
}
