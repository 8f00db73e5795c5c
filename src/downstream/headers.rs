//! Header propagation policy.
//!
//! # Responsibilities
//! - Build the outbound header set from the inbound request
//! - Forward the Authorization header verbatim for protected endpoints
//! - Keep everything else out (strict allow-list, not a blocklist)
//!
//! # Design Decisions
//! - Content-Type is always application/json toward the backend
//! - Connection: close forbids persistent-connection reuse at the protocol
//!   level, so pooling stays an implementation detail of the client
//! - Inbound cookies, host, and any other header never cross

use axum::http::{header, HeaderMap, HeaderValue};

/// Build the outbound header set.
///
/// The inbound `Authorization` value is copied byte-for-byte when
/// `forward_auth` is set; the dispatcher has already verified it is present
/// for protected endpoints.
pub fn outbound_headers(inbound: &HeaderMap, forward_auth: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("close"));

    if forward_auth {
        if let Some(auth) = inbound.get(header::AUTHORIZATION) {
            headers.insert(header::AUTHORIZATION, auth.clone());
        }
    }

    headers
}
