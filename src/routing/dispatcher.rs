//! Request dispatch.
//!
//! # Responsibilities
//! - Reject protected requests without an Authorization header (401)
//! - Reject requests whose downstream URL is unconfigured (500)
//! - Build the outbound call spec and delegate to the client adapter
//! - Translate the outcome into the client response
//!
//! # Design Decisions
//! - One dispatch path for every endpoint; the per-route differences live
//!   entirely in the endpoint table
//! - Rejections happen before any network I/O
//! - No retries at this layer

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::downstream::{outbound_headers, OutboundCallSpec};
use crate::http::response::translate;
use crate::http::server::AppState;
use crate::routing::endpoints::Endpoint;

/// 401 body for protected endpoints called without an Authorization header.
pub const MISSING_AUTH_BODY: &str = "Action not authorized. No authorization token provided.";

/// Handle one inbound request against the given endpoint definition.
pub async fn dispatch(
    state: &AppState,
    endpoint: Endpoint,
    method: Method,
    param: Option<&str>,
    headers: &HeaderMap,
    body: Bytes,
) -> Response {
    let messages = endpoint.messages();

    if endpoint.requires_auth() && !headers.contains_key(header::AUTHORIZATION) {
        tracing::warn!(
            endpoint = endpoint.name(),
            "Rejected request without authorization header"
        );
        return (StatusCode::UNAUTHORIZED, MISSING_AUTH_BODY).into_response();
    }

    let Some(base) = endpoint.base_url(&state.config.downstream) else {
        tracing::error!(endpoint = endpoint.name(), "Downstream URL not configured");
        return (StatusCode::INTERNAL_SERVER_ERROR, messages.not_configured).into_response();
    };

    let url = endpoint.downstream_url(base, param);

    tracing::debug!(
        endpoint = endpoint.name(),
        method = %method,
        url = %url,
        "Forwarding request"
    );

    let spec = OutboundCallSpec {
        method,
        url,
        headers: outbound_headers(headers, endpoint.requires_auth()),
        body,
        timeout: Duration::from_secs(state.config.timeouts.downstream_secs),
    };

    let outcome = state.client.call(spec).await;
    translate(outcome, messages)
}
