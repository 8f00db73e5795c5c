//! Route dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → endpoints.rs (endpoint definition: auth flag, target, messages)
//!     → dispatcher.rs (auth check → config check → resolve → call)
//!     → downstream adapter
//!     → response translator
//! ```

pub mod dispatcher;
pub mod endpoints;

pub use dispatcher::{dispatch, MISSING_AUTH_BODY};
pub use endpoints::{Endpoint, EndpointMessages};
