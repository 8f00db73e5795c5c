//! Downstream client adapter.
//!
//! # Responsibilities
//! - Issue exactly one HTTP request per call, bounded by the call's timeout
//! - Classify the result into a [`DownstreamOutcome`]
//!
//! # Design Decisions
//! - No retries; each failure is reported once and immediately
//! - Redirects are not followed: any received status passes through
//! - The call suspends only its own request task; concurrent requests are
//!   unaffected

use axum::http::header;

use crate::downstream::outcome::{BackendResponse, DownstreamOutcome, OutboundCallSpec};

/// Thin wrapper around a shared `reqwest::Client`.
///
/// Cloning is cheap; the inner client is reference-counted.
#[derive(Clone)]
pub struct DownstreamClient {
    inner: reqwest::Client,
}

impl DownstreamClient {
    /// Create the client. Redirect following is disabled so 3xx statuses
    /// reach the classification step untouched.
    pub fn new() -> reqwest::Result<Self> {
        let inner = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { inner })
    }

    /// Issue the outbound call and classify its result.
    pub async fn call(&self, spec: OutboundCallSpec) -> DownstreamOutcome {
        let request = self
            .inner
            .request(spec.method, &spec.url)
            .headers(spec.headers)
            .body(spec.body)
            .timeout(spec.timeout);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %spec.url, error = %e, "Downstream call failed");
                return classify_send_error(&e);
            }
        };

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                tracing::warn!(url = %spec.url, "Downstream response body timed out");
                return DownstreamOutcome::Timeout;
            }
            Err(e) => {
                tracing::warn!(url = %spec.url, error = %e, "Failed to read downstream body");
                return DownstreamOutcome::ProtocolError;
            }
        };

        let backend = BackendResponse {
            status,
            content_type,
            body,
        };

        if status.as_u16() >= 400 {
            DownstreamOutcome::BackendError(backend)
        } else {
            DownstreamOutcome::Success(backend)
        }
    }
}

/// Triage a send failure: timeout first, then connection failure, then
/// everything else (malformed URL, request build failure).
fn classify_send_error(err: &reqwest::Error) -> DownstreamOutcome {
    if err.is_timeout() {
        DownstreamOutcome::Timeout
    } else if err.is_connect() {
        DownstreamOutcome::Unreachable
    } else {
        DownstreamOutcome::ProtocolError
    }
}
