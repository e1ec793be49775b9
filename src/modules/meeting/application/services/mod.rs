mod create_meeting_service;
mod get_meetings_service;
mod get_single_meeting_service;
mod soft_delete_meeting_service;
mod update_meeting_service;

pub use create_meeting_service::CreateMeetingService;
pub use get_meetings_service::GetMeetingsService;
pub use get_single_meeting_service::GetSingleMeetingService;
pub use soft_delete_meeting_service::SoftDeleteMeetingService;
pub use update_meeting_service::UpdateMeetingService;
