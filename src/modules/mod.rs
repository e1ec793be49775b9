pub mod auth;
pub mod meeting;
