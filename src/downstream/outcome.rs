//! Outbound call specification and outcome classification types.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};

/// Fully resolved outbound request.
///
/// Derived deterministically from the inbound request plus the endpoint
/// definition; constructed fresh per call and discarded after use.
#[derive(Debug, Clone)]
pub struct OutboundCallSpec {
    pub method: Method,
    /// Target URL with path parameters already substituted.
    pub url: String,
    /// Outbound header set produced by the propagation policy.
    pub headers: HeaderMap,
    /// Opaque inbound body, forwarded unchanged.
    pub body: Bytes,
    pub timeout: Duration,
}

/// Response received from the backend, kept for pass-through.
#[derive(Debug)]
pub struct BackendResponse {
    pub status: StatusCode,
    /// Mirrored onto the client response; no other backend header crosses.
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// Classified result of one downstream call.
///
/// Classification priority when no response was received: timeout first,
/// then connection failure, then everything else.
#[derive(Debug)]
pub enum DownstreamOutcome {
    /// A response with status 200..=399 (3xx passes through as-is,
    /// redirects are not followed).
    Success(BackendResponse),
    /// A response with status >= 400; the backend's exact payload reaches
    /// the client.
    BackendError(BackendResponse),
    /// The connection could not be established or was refused.
    Unreachable,
    /// The timeout elapsed before a response arrived.
    Timeout,
    /// The request could not be built or sent (malformed URL, etc.).
    ProtocolError,
}
