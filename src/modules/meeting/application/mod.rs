pub mod domain;
pub mod meeting_use_cases;
pub mod ports;
pub mod services;
