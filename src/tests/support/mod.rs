pub mod app_state_builder;
pub mod auth_helper;
pub mod meeting_test_fixtures;
pub mod sql_log;
pub mod stubs;
