use actix_web::{get, web, Responder};
use tracing::error;

use super::{meeting_id_from_path, meeting_not_found};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::meeting::application::ports::incoming::use_cases::GetSingleMeetingError;
use crate::modules::meeting::application::ports::outgoing::MeetingView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a meeting
#[utoipa::path(
    get,
    path = "/api/meetings/{meeting_id}",
    tag = "meetings",
    params(("meeting_id" = String, Path, description = "Meeting id (UUID)")),
    responses(
        (status = 200, description = "Meeting", body = inline(SuccessResponse<MeetingView>)),
        (
            status = 400,
            description = "Malformed meeting id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_MEETING_ID", "message": "Invalid meeting ID" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/meetings/{meeting_id}")]
pub async fn get_single_meeting_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let meeting_id = match meeting_id_from_path(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.meeting.get_single.execute(meeting_id).await {
        Ok(meeting) => ApiResponse::success(meeting),

        Err(GetSingleMeetingError::NotFound) => meeting_not_found(),

        Err(GetSingleMeetingError::RepositoryError(msg)) => {
            error!(%meeting_id, "Failed to fetch meeting: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
