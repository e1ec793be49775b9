use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{meeting_id_from_path, meeting_not_found, MeetingMessageResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::meeting::application::domain::entities::MeetingStatus;
use crate::modules::meeting::application::ports::incoming::use_cases::{
    MeetingPatch, UpdateMeetingError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Mutable fields only. `organizer`, `deleted`, `id` and timestamps are
/// not part of the contract and are dropped during deserialization.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "2024-06-02")]
    pub date: Option<String>,
    #[schema(example = "14:00")]
    pub start_time: Option<String>,
    #[schema(example = "15:00")]
    pub end_time: Option<String>,
    pub participants: Option<Vec<Uuid>>,
    pub status: Option<MeetingStatus>,
}

impl From<UpdateMeetingRequest> for MeetingPatch {
    fn from(req: UpdateMeetingRequest) -> Self {
        MeetingPatch {
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

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update a meeting
///
/// Only the organizer may update. Absent fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/meetings/{meeting_id}",
    tag = "meetings",
    params(("meeting_id" = String, Path, description = "Meeting id (UUID)")),
    request_body = UpdateMeetingRequest,
    responses(
        (status = 200, description = "Meeting updated", body = inline(SuccessResponse<MeetingMessageResponse>)),
        (status = 400, description = "Validation error or malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 403,
            description = "Caller is not the organizer",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "FORBIDDEN", "message": "Only the organizer can update the meeting" }
            })
        ),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/meetings/{meeting_id}")]
pub async fn update_meeting_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateMeetingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let meeting_id = match meeting_id_from_path(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let patch = MeetingPatch::from(req.into_inner());

    match data
        .meeting
        .update
        .execute(user.user_id, meeting_id, patch)
        .await
    {
        Ok(meeting) => ApiResponse::success(MeetingMessageResponse {
            message: "Meeting updated successfully".to_string(),
            meeting,
        }),

        Err(UpdateMeetingError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),

        Err(UpdateMeetingError::NotFound) => meeting_not_found(),

        Err(e @ UpdateMeetingError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(UpdateMeetingError::RepositoryError(msg)) => {
            error!(%meeting_id, "Failed to update meeting: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
