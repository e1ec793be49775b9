use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "meeting-scheduler".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

/// Token provider in the shape the auth extractor looks up.
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header value for `user_id`.
pub fn bearer_for(user_id: Uuid) -> String {
    let token = create_test_jwt_service()
        .generate_access_token(user_id)
        .expect("test token");
    format!("Bearer {}", token)
}
