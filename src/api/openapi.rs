use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use crate::shared::api::MessageBody;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::meeting::adapter::incoming::web::routes::{
    CreateMeetingRequest, MeetingMessageResponse, UpdateMeetingRequest,
};
use crate::meeting::application::domain::entities::MeetingStatus;
use crate::meeting::application::ports::outgoing::{MeetingView, UserSummary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meeting Scheduler API",
        version = "1.0.0",
        description = "Create, browse, update and cancel meetings between registered users"
    ),
    paths(
        crate::meeting::adapter::incoming::web::routes::create_meeting_handler,
        crate::meeting::adapter::incoming::web::routes::get_meetings_handler,
        crate::meeting::adapter::incoming::web::routes::get_single_meeting_handler,
        crate::meeting::adapter::incoming::web::routes::update_meeting_handler,
        crate::meeting::adapter::incoming::web::routes::soft_delete_meeting_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,
            MessageBody,

            // Meeting DTOs
            CreateMeetingRequest,
            UpdateMeetingRequest,
            MeetingMessageResponse,
            MeetingView,
            UserSummary,
            MeetingStatus
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "meetings", description = "Meeting scheduling endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
