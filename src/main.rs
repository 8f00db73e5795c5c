//! Admin API Gateway
//!
//! A small gateway in front of the authentication/user-management backend.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 ADMIN GATEWAY                 │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ routing  │──▶│downstream │──┼──▶ Backend
//!                    │  │ server  │   │dispatcher│   │  client   │  │
//!                    │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                    │                                      │        │
//!   Client Response  │  ┌──────────┐                        │        │
//!   ◀────────────────┼──│ response │◀───── DownstreamOutcome┘        │
//!                    │  │translator│                                  │
//!                    │  └──────────┘                                  │
//!                    │                                               │
//!                    │  config (env, immutable) · tracing · CORS     │
//!                    └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use admin_gateway::config;
use admin_gateway::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("admin-gateway v0.1.0 starting");

    let config = config::from_env()?;

    tracing::info!(
        port = config.listener.port,
        login_url_set = config.downstream.login_url.is_some(),
        users_base_set = config.downstream.users_base_url.is_some(),
        ping_url_set = config.downstream.ping_url.is_some(),
        downstream_timeout_secs = config.timeouts.downstream_secs,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(("0.0.0.0", server.config().listener.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
