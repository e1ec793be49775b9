use std::env;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Runtime configuration, assembled from the process environment after the
/// matching `.env.{RUST_ENV}` / `.env` file has been loaded.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
    pub fn load_env_files() -> String {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        environment
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Self::load_env_files();

        let database = DatabaseConfig {
            url: required("DATABASE_URL")?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 50)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", 10)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(Self {
            environment,
            host: required("HOST")?,
            port: parse_required("PORT")?,
            database,
            jwt: JwtConfig::from_env()?,
        })
    }
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_required<T>(key: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &required(key)?)
}

pub(crate) fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => parse_value(key, &raw),
        _ => Ok(default),
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}
