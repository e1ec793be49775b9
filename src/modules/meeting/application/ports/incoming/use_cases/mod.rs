mod create_meeting;
mod get_meetings;
mod get_single_meeting;
mod soft_delete_meeting;
mod update_meeting;

pub use create_meeting::{CreateMeetingError, CreateMeetingUseCase, MeetingDraft};
pub use get_meetings::{GetMeetingsError, GetMeetingsUseCase};
pub use get_single_meeting::{GetSingleMeetingError, GetSingleMeetingUseCase};
pub use soft_delete_meeting::{SoftDeleteMeetingError, SoftDeleteMeetingUseCase};
pub use update_meeting::{MeetingPatch, UpdateMeetingError, UpdateMeetingUseCase};
