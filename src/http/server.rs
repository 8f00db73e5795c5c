//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all `/admin` endpoints
//! - Wire up middleware (tracing, request timeout, request ID, CORS)
//! - Bind the server to a listener and serve until shutdown
//! - Funnel every handler into the single dispatch path

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, Method},
    response::Response,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::downstream::DownstreamClient;
use crate::routing::{dispatch, Endpoint};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub client: DownstreamClient,
}

/// HTTP server for the admin gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> reqwest::Result<Self> {
        let client = DownstreamClient::new()?;
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            client,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/admin/login", post(login))
            .route("/admin/users", post(create_user).get(list_users))
            .route(
                "/admin/users/{key}",
                get(fetch_user_or_role).put(update_user).delete(delete_user),
            )
            .route("/admin/ping", get(ping))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(cors_layer(config))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Build the CORS allow-list layer. Invalid origins are logged and skipped
/// rather than failing startup.
fn cors_layer(config: &GatewayConfig) -> CorsLayer {
    let mut origins = Vec::new();
    for origin in &config.cors.allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => {
                tracing::error!(origin = %origin, "Ignoring invalid CORS origin");
            }
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

async fn login(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    dispatch(&state, Endpoint::Login, Method::POST, None, &headers, body).await
}

async fn create_user(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    dispatch(
        &state,
        Endpoint::CreateUser,
        Method::POST,
        None,
        &headers,
        body,
    )
    .await
}

async fn list_users(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    dispatch(
        &state,
        Endpoint::ListUsers,
        Method::GET,
        None,
        &headers,
        body,
    )
    .await
}

/// `GET /admin/users/{key}` serves both id and role lookups; the endpoint
/// table disambiguates on the key shape.
async fn fetch_user_or_role(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let endpoint = Endpoint::classify_user_key(&key);
    dispatch(&state, endpoint, Method::GET, Some(&key), &headers, body).await
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    dispatch(
        &state,
        Endpoint::UserById,
        Method::PUT,
        Some(&id),
        &headers,
        body,
    )
    .await
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    dispatch(
        &state,
        Endpoint::UserById,
        Method::DELETE,
        Some(&id),
        &headers,
        body,
    )
    .await
}

async fn ping(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    dispatch(&state, Endpoint::Ping, Method::GET, None, &headers, body).await
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_exposes_its_effective_config() {
        let mut config = GatewayConfig::default();
        config.listener.port = 4123;
        config.timeouts.downstream_secs = 3;

        let server = HttpServer::new(config).unwrap();
        assert_eq!(server.config().listener.port, 4123);
        assert_eq!(server.config().timeouts.downstream_secs, 3);
    }
}
