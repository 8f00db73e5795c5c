//! Configuration loading from the environment.
//!
//! # Environment variables
//! - `PORT` — listening port (default 4000)
//! - `ADMIN_AUTH_API_LOGIN_URL` — login target
//! - `ADMIN_AUTH_API_USERS_BASE` — users base target
//! - `ADMIN_AUTH_API_TEST_URL` — ping target
//! - `CORS_ALLOWED_ORIGINS` — comma-separated origin allow-list
//!
//! Unset downstream URLs are not a startup error; the affected endpoints
//! answer 500 "not configured" at dispatch time instead.

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Load configuration from the environment.
pub fn from_env() -> Result<GatewayConfig, ConfigError> {
    let mut config = GatewayConfig::default();

    if let Some(port) = non_empty_var("PORT") {
        config.listener.port = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
    }

    config.downstream.login_url = non_empty_var("ADMIN_AUTH_API_LOGIN_URL");
    config.downstream.users_base_url = non_empty_var("ADMIN_AUTH_API_USERS_BASE");
    config.downstream.ping_url = non_empty_var("ADMIN_AUTH_API_TEST_URL");

    if let Some(origins) = non_empty_var("CORS_ALLOWED_ORIGINS") {
        config.cors.allowed_origins = parse_origins(&origins);
    }

    Ok(config)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
