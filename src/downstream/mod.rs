//! Downstream call subsystem.
//!
//! # Data Flow
//! ```text
//! dispatcher builds OutboundCallSpec
//!     → headers.rs (strict allow-list header set)
//!     → client.rs (one bounded HTTP request)
//!     → DownstreamOutcome (classified result)
//!     → response translator
//! ```

pub mod client;
pub mod headers;
pub mod outcome;

pub use client::DownstreamClient;
pub use headers::outbound_headers;
pub use outcome::{BackendResponse, DownstreamOutcome, OutboundCallSpec};
