use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::application::domain::entities::MeetingValidationError;
use crate::modules::meeting::application::domain::policies::schedule_policy::{
    ensure_time_order, parse_date, parse_time,
};
use crate::modules::meeting::application::ports::incoming::use_cases::{
    MeetingPatch, UpdateMeetingError, UpdateMeetingUseCase,
};
use crate::modules::meeting::application::ports::outgoing::{
    MeetingQuery, MeetingQueryError, MeetingRepository, MeetingRepositoryError, MeetingView,
    UpdateMeetingData,
};

pub struct UpdateMeetingService<R, Q>
where
    R: MeetingRepository,
    Q: MeetingQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateMeetingService<R, Q>
where
    R: MeetingRepository,
    Q: MeetingQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateMeetingUseCase for UpdateMeetingService<R, Q>
where
    R: MeetingRepository + Send + Sync,
    Q: MeetingQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        meeting_id: Uuid,
        patch: MeetingPatch,
    ) -> Result<MeetingView, UpdateMeetingError> {
        check_supplied_time_pair(&patch)?;

        let current = self
            .repository
            .find_active(meeting_id)
            .await
            .map_err(map_repository_error)?;

        if !current.is_organized_by(requester) {
            warn!(%meeting_id, %requester, "Update rejected: requester is not the organizer");
            return Err(UpdateMeetingError::Forbidden);
        }

        let changes = validate_patch(patch)?;

        // A single supplied time must still fit the stored counterpart
        ensure_time_order(
            changes.start_time.unwrap_or(current.start_time),
            changes.end_time.unwrap_or(current.end_time),
        )?;

        let updated = self
            .repository
            .update_meeting(meeting_id, changes)
            .await
            .map_err(map_repository_error)?;

        info!(%meeting_id, "Meeting updated");

        self.query
            .get_by_id(updated.id)
            .await
            .map_err(|e| match e {
                MeetingQueryError::NotFound => UpdateMeetingError::NotFound,
                other => UpdateMeetingError::RepositoryError(other.to_string()),
            })
    }
}

fn map_repository_error(err: MeetingRepositoryError) -> UpdateMeetingError {
    match err {
        MeetingRepositoryError::NotFound => UpdateMeetingError::NotFound,
        other => UpdateMeetingError::RepositoryError(other.to_string()),
    }
}

fn present_text(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, MeetingValidationError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(MeetingValidationError::BlankField(field)),
        other => Ok(other),
    }
}

/// Only rule checked before the lookup: two supplied times must be ordered.
/// Malformed values are left for `validate_patch`.
fn check_supplied_time_pair(patch: &MeetingPatch) -> Result<(), MeetingValidationError> {
    let (Some(start), Some(end)) = (patch.start_time.as_deref(), patch.end_time.as_deref()) else {
        return Ok(());
    };

    match (parse_time(start), parse_time(end)) {
        (Ok(start), Ok(end)) => ensure_time_order(start, end),
        _ => Ok(()),
    }
}

/// Parses the supplied fields only.
fn validate_patch(patch: MeetingPatch) -> Result<UpdateMeetingData, MeetingValidationError> {
    let title = present_text(patch.title, "Title")?.map(|t| t.trim().to_string());
    let description = present_text(patch.description, "Description")?;
    let date = patch.date.as_deref().map(parse_date).transpose()?;
    let start_time = patch.start_time.as_deref().map(parse_time).transpose()?;
    let end_time = patch.end_time.as_deref().map(parse_time).transpose()?;

    Ok(UpdateMeetingData {
        title,
        description,
        date,
        start_time,
        end_time,
        participants: patch.participants,
        status: patch.status,
    })
}
