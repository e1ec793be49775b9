use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::application::ports::incoming::use_cases::{
    SoftDeleteMeetingError, SoftDeleteMeetingUseCase,
};
use crate::modules::meeting::application::ports::outgoing::{
    MeetingRepository, MeetingRepositoryError,
};

pub struct SoftDeleteMeetingService<R>
where
    R: MeetingRepository,
{
    repository: R,
}

impl<R> SoftDeleteMeetingService<R>
where
    R: MeetingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeleteMeetingUseCase for SoftDeleteMeetingService<R>
where
    R: MeetingRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        meeting_id: Uuid,
    ) -> Result<(), SoftDeleteMeetingError> {
        let current = self
            .repository
            .find_active(meeting_id)
            .await
            .map_err(map_repository_error)?;

        if !current.is_organized_by(requester) {
            warn!(%meeting_id, %requester, "Delete rejected: requester is not the organizer");
            return Err(SoftDeleteMeetingError::Forbidden);
        }

        self.repository
            .soft_delete_meeting(meeting_id)
            .await
            .map_err(map_repository_error)?;

        info!(%meeting_id, "Meeting soft-deleted");
        Ok(())
    }
}

fn map_repository_error(err: MeetingRepositoryError) -> SoftDeleteMeetingError {
    match err {
        MeetingRepositoryError::NotFound => SoftDeleteMeetingError::NotFound,
        other => SoftDeleteMeetingError::RepositoryError(other.to_string()),
    }
}
