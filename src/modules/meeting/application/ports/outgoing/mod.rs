pub mod meeting_query;
pub mod meeting_repository;

pub use meeting_query::{
    MeetingListFilter, MeetingQuery, MeetingQueryError, MeetingView, UserSummary,
};
pub use meeting_repository::{
    CreateMeetingData, MeetingRecord, MeetingRepository, MeetingRepositoryError,
    UpdateMeetingData,
};
