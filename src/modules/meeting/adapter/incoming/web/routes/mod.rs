use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::modules::meeting::application::domain::policies::schedule_policy::parse_meeting_id;
use crate::shared::api::ApiResponse;

mod create_meeting;
mod get_meetings;
mod get_single_meeting;
mod soft_delete_meeting;
mod update_meeting;

pub use create_meeting::*;
pub use get_meetings::*;
pub use get_single_meeting::*;
pub use soft_delete_meeting::*;
pub use update_meeting::*;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_meeting_handler)
        .service(get_meetings_handler)
        .service(get_single_meeting_handler)
        .service(update_meeting_handler)
        .service(soft_delete_meeting_handler);
}

/// Malformed ids are a client error, distinct from an absent meeting.
fn meeting_id_from_path(raw: &str) -> Result<Uuid, HttpResponse> {
    parse_meeting_id(raw)
        .map_err(|e| ApiResponse::bad_request("INVALID_MEETING_ID", &e.to_string()))
}

fn meeting_not_found() -> HttpResponse {
    ApiResponse::not_found("MEETING_NOT_FOUND", "Meeting not found")
}
