use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::meeting::application::domain::entities::MeetingStatus;
use crate::modules::meeting::application::ports::incoming::use_cases::{
    CreateMeetingError, MeetingDraft,
};
use crate::modules::meeting::application::ports::outgoing::MeetingView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Any `organizer` sent by the client is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRequest {
    #[schema(example = "Sync")]
    pub title: Option<String>,
    #[schema(example = "Weekly")]
    pub description: Option<String>,
    #[schema(example = "2024-06-01")]
    pub date: Option<String>,
    #[schema(example = "10:00")]
    pub start_time: Option<String>,
    #[schema(example = "11:00")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub participants: Vec<Uuid>,
    pub status: Option<MeetingStatus>,
}

impl From<CreateMeetingRequest> for MeetingDraft {
    fn from(req: CreateMeetingRequest) -> Self {
        MeetingDraft {
            title: req.title,
            description: req.description,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            participants: req.participants,
            status: req.status,
        }
    }
}

/// Confirmation message plus the expanded meeting.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeetingMessageResponse {
    #[schema(example = "Meeting created successfully")]
    pub message: String,
    pub meeting: MeetingView,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a meeting
///
/// The authenticated caller becomes the organizer.
#[utoipa::path(
    post,
    path = "/api/meetings",
    tag = "meetings",
    request_body = CreateMeetingRequest,
    responses(
        (status = 201, description = "Meeting created", body = inline(SuccessResponse<MeetingMessageResponse>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "End time must be after start time"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/meetings")]
pub async fn create_meeting_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateMeetingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = MeetingDraft::from(req.into_inner());

    match data.meeting.create.execute(user.user_id, draft).await {
        Ok(meeting) => ApiResponse::created(MeetingMessageResponse {
            message: "Meeting created successfully".to_string(),
            meeting,
        }),

        Err(CreateMeetingError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),

        Err(CreateMeetingError::RepositoryError(e)) => {
            error!(organizer = %user.user_id, error = %e, "Failed to create meeting");
            ApiResponse::internal_error()
        }
    }
}
