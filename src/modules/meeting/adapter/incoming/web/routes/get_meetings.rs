use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::meeting::application::domain::entities::{
    MeetingStatus, MeetingValidationError,
};
use crate::modules::meeting::application::domain::policies::schedule_policy::{
    non_blank, parse_date,
};
use crate::modules::meeting::application::ports::incoming::use_cases::GetMeetingsError;
use crate::modules::meeting::application::ports::outgoing::{MeetingListFilter, MeetingView};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetMeetingsQuery {
    /// Exact status match
    #[param(value_type = Option<MeetingStatus>)]
    pub status: Option<String>,
    /// Inclusive lower bound on the meeting date
    #[param(example = "2024-06-01")]
    pub start_date: Option<String>,
    /// Inclusive upper bound on the meeting date
    #[param(example = "2024-06-30")]
    pub end_date: Option<String>,
}

impl TryFrom<GetMeetingsQuery> for MeetingListFilter {
    type Error = MeetingValidationError;

    fn try_from(q: GetMeetingsQuery) -> Result<Self, Self::Error> {
        Ok(MeetingListFilter {
            status: non_blank(q.status)
                .map(|s| s.trim().parse::<MeetingStatus>())
                .transpose()?,
            start_date: non_blank(q.start_date).as_deref().map(parse_date).transpose()?,
            end_date: non_blank(q.end_date).as_deref().map(parse_date).transpose()?,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List meetings
///
/// Returns every non-deleted meeting matching the filters, ordered by date
/// then start time. Meetings of all organizers are visible.
#[utoipa::path(
    get,
    path = "/api/meetings",
    tag = "meetings",
    params(GetMeetingsQuery),
    responses(
        (status = 200, description = "Meetings", body = inline(SuccessResponse<Vec<MeetingView>>)),
        (status = 400, description = "Malformed filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/meetings")]
pub async fn get_meetings_handler(
    _user: AuthenticatedUser,
    query: web::Query<GetMeetingsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match MeetingListFilter::try_from(query.into_inner()) {
        Ok(filter) => filter,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.meeting.get_list.execute(filter).await {
        Ok(meetings) => ApiResponse::success(meetings),

        Err(GetMeetingsError::QueryFailed(msg)) => {
            error!("Failed to list meetings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
