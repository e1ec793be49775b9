pub mod modules;
pub use modules::auth;
pub use modules::meeting;
pub mod health;

mod api;
mod config;
mod shared;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::config::AppConfig;
use crate::meeting::adapter::outgoing::{MeetingQueryPostgres, MeetingRepositoryPostgres};
use crate::meeting::application::meeting_use_cases::MeetingUseCases;
use crate::meeting::application::services::{
    CreateMeetingService, GetMeetingsService, GetSingleMeetingService, SoftDeleteMeetingService,
    UpdateMeetingService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{middleware::Logger, web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub meeting: MeetingUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(environment = %config.environment, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    let db_arc = Arc::new(conn);

    // Meeting wiring
    let meeting_repo = MeetingRepositoryPostgres::new(Arc::clone(&db_arc));
    let meeting_query = MeetingQueryPostgres::new(Arc::clone(&db_arc));

    let meeting_use_cases = MeetingUseCases {
        create: Arc::new(CreateMeetingService::new(
            meeting_repo.clone(),
            meeting_query.clone(),
        )),
        get_list: Arc::new(GetMeetingsService::new(meeting_query.clone())),
        get_single: Arc::new(GetSingleMeetingService::new(meeting_query.clone())),
        update: Arc::new(UpdateMeetingService::new(
            meeting_repo.clone(),
            meeting_query,
        )),
        soft_delete: Arc::new(SoftDeleteMeetingService::new(meeting_repo)),
    };

    let state = AppState {
        meeting: meeting_use_cases,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let db_for_server = Arc::clone(&db_arc);
    let openapi = api::openapi::ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Meetings
    crate::meeting::adapter::incoming::web::routes::init_routes(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
