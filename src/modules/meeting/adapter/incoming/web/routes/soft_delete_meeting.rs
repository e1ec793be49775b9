use actix_web::{delete, web, Responder};
use tracing::error;

use super::{meeting_id_from_path, meeting_not_found};
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::meeting::application::ports::incoming::use_cases::SoftDeleteMeetingError;
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;

/// Delete a meeting
///
/// Marks the meeting deleted; it disappears from every read. Only the
/// organizer may delete.
#[utoipa::path(
    delete,
    path = "/api/meetings/{meeting_id}",
    tag = "meetings",
    params(("meeting_id" = String, Path, description = "Meeting id (UUID)")),
    responses(
        (
            status = 200,
            description = "Meeting deleted",
            body = MessageResponse,
            example = json!({
                "success": true,
                "data": { "message": "Meeting deleted successfully" }
            })
        ),
        (status = 400, description = "Malformed meeting id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the organizer", body = ErrorResponse),
        (status = 404, description = "Meeting not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/meetings/{meeting_id}")]
pub async fn soft_delete_meeting_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let meeting_id = match meeting_id_from_path(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data
        .meeting
        .soft_delete
        .execute(user.user_id, meeting_id)
        .await
    {
        Ok(()) => ApiResponse::success(MessageBody::new("Meeting deleted successfully")),

        Err(SoftDeleteMeetingError::NotFound) => meeting_not_found(),

        Err(e @ SoftDeleteMeetingError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(SoftDeleteMeetingError::RepositoryError(msg)) => {
            error!(%meeting_id, "Failed to delete meeting: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
