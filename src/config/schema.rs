//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits; every section has defaults so a minimal
//! environment still produces a usable config.

use serde::{Deserialize, Serialize};

/// Root configuration for the admin gateway.
///
/// Built once at startup and shared read-only via `Arc`. Handlers never
/// read ambient environment state.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (port).
    pub listener: ListenerConfig,

    /// Downstream backend endpoint URLs.
    pub downstream: DownstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Cross-origin allow-list.
    pub cors: CorsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to listen on.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 4000 }
    }
}

/// Downstream endpoint URLs for the authentication/user-management backend.
///
/// Each URL is optional: an unset URL does not fail startup, it yields a
/// 500 "not configured" response at dispatch time for the affected
/// endpoints (a deployment defect, reported per request).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DownstreamConfig {
    /// Login endpoint of the authentication backend.
    pub login_url: Option<String>,

    /// Base URL for user-management operations. Per-operation suffixes
    /// (`/{id}`, `/role/{role}`) are appended at dispatch time.
    pub users_base_url: Option<String>,

    /// Liveness-probe target for `/admin/ping`.
    pub ping_url: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total inbound request timeout in seconds.
    pub request_secs: u64,

    /// Timeout for a single downstream call in seconds.
    pub downstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            downstream_secs: 10,
        }
    }
}

/// Cross-origin access control configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the gateway from a browser.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.port, 4000);
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.timeouts.downstream_secs, 10);
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(config.downstream.login_url.is_none());
        assert!(config.downstream.users_base_url.is_none());
        assert!(config.downstream.ping_url.is_none());
    }
}
