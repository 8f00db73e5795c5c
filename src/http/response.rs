//! Response translation.
//!
//! # Responsibilities
//! - Map a classified downstream outcome onto the client response
//! - Pass backend status and body through unchanged
//! - Author the gateway's own bodies only for transport-level failures
//!
//! # Design Decisions
//! - Unreachable and Timeout share one client-facing message per endpoint;
//!   the distinction survives only in classification and logs
//! - Pass-through mirrors the backend's Content-Type header and nothing else

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::downstream::{BackendResponse, DownstreamOutcome};
use crate::routing::endpoints::EndpointMessages;

/// Translate a downstream outcome into the client response.
pub fn translate(outcome: DownstreamOutcome, messages: &EndpointMessages) -> Response {
    match outcome {
        DownstreamOutcome::Success(backend) | DownstreamOutcome::BackendError(backend) => {
            passthrough(backend)
        }
        DownstreamOutcome::Unreachable | DownstreamOutcome::Timeout => {
            (StatusCode::INTERNAL_SERVER_ERROR, messages.unreachable).into_response()
        }
        DownstreamOutcome::ProtocolError => {
            (StatusCode::INTERNAL_SERVER_ERROR, messages.internal).into_response()
        }
    }
}

fn passthrough(backend: BackendResponse) -> Response {
    let mut response = Response::new(Body::from(backend.body));
    *response.status_mut() = backend.status;
    if let Some(content_type) = backend.content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}
