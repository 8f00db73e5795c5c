//! Admin API gateway library.
//!
//! Sits in front of the authentication/user-management backend and relays
//! client requests to it, translating transport- and backend-level failures
//! into a coherent client-facing response.

pub mod config;
pub mod downstream;
pub mod http;
pub mod routing;

pub use config::GatewayConfig;
pub use http::HttpServer;
