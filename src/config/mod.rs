//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read & parse env vars)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to the router state
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so an empty environment still boots
//! - Missing downstream URLs are a per-request 500, not a startup failure

pub mod loader;
pub mod schema;

pub use loader::{from_env, ConfigError};
pub use schema::{CorsConfig, DownstreamConfig, GatewayConfig, ListenerConfig, TimeoutConfig};
