use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::application::domain::entities::MeetingValidationError;
use crate::modules::meeting::application::domain::policies::schedule_policy::{
    ensure_time_order, non_blank, parse_date, parse_time,
};
use crate::modules::meeting::application::ports::incoming::use_cases::{
    CreateMeetingError, CreateMeetingUseCase, MeetingDraft,
};
use crate::modules::meeting::application::ports::outgoing::{
    CreateMeetingData, MeetingQuery, MeetingRepository, MeetingView,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateMeetingService<R, Q>
where
    R: MeetingRepository,
    Q: MeetingQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateMeetingService<R, Q>
where
    R: MeetingRepository,
    Q: MeetingQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateMeetingUseCase for CreateMeetingService<R, Q>
where
    R: MeetingRepository + Send + Sync,
    Q: MeetingQuery + Send + Sync,
{
    async fn execute(
        &self,
        organizer: UserId,
        draft: MeetingDraft,
    ) -> Result<MeetingView, CreateMeetingError> {
        let data = validate_draft(organizer, draft)?;

        let record = self
            .repository
            .create_meeting(data)
            .await
            .map_err(|e| CreateMeetingError::RepositoryError(e.to_string()))?;

        info!(meeting_id = %record.id, organizer = %organizer, "Meeting created");

        // Re-read through the query side so the response carries expanded references
        self.query
            .get_by_id(record.id)
            .await
            .map_err(|e| CreateMeetingError::RepositoryError(e.to_string()))
    }
}

/// Required fields first, then formats, then ordering. The body can never
/// choose the organizer.
fn validate_draft(
    organizer: UserId,
    draft: MeetingDraft,
) -> Result<CreateMeetingData, MeetingValidationError> {
    let (Some(title), Some(description), Some(date), Some(start_time), Some(end_time)) = (
        non_blank(draft.title),
        non_blank(draft.description),
        non_blank(draft.date),
        non_blank(draft.start_time),
        non_blank(draft.end_time),
    ) else {
        return Err(MeetingValidationError::MissingRequiredFields);
    };

    let date = parse_date(&date)?;
    let start_time = parse_time(&start_time)?;
    let end_time = parse_time(&end_time)?;
    ensure_time_order(start_time, end_time)?;

    Ok(CreateMeetingData {
        organizer,
        title: title.trim().to_string(),
        description,
        date,
        start_time,
        end_time,
        participants: draft.participants,
        status: draft.status.unwrap_or_default(),
    })
}
