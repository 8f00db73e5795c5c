//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, /admin routes)
//!     → routing dispatcher (auth + config checks, forward)
//!     → response.rs (translate downstream outcome)
//!     → send to client
//! ```

pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
