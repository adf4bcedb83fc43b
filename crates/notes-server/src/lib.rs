//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints for note CRUD and title search
//! - JSON error responses for validation failures and unknown ids
//! - Environment-driven configuration for logging and CORS
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request ID generation and propagation
//! - Request tracing and logging
//! - CORS handling
//!
//! Exactly one [`NoteService`](notes_store::NoteService) exists per process.
//! It is created in `main`, wrapped in [`AppState`], and reaches every
//! handler through axum's `State` extractor.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{build_app, AppState, ServerConfig};
//! use notes_store::{NoteService, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let addr = config.socket_addr();
//!     let state = AppState::new(NoteService::new(Store::new()), config);
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, build_app(state)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{AllowedOrigins, ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;

/// Build the router with the full middleware stack.
///
/// Layers, outermost first: request id assignment, request tracing,
/// request id propagation to the response, CORS.
pub fn build_app(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config().cors_allowed_origins);

    routes::build_router(state).layer(
        ServiceBuilder::new()
            .layer(middleware::request_id::set_request_id_layer())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(middleware::request_id::make_request_span),
            )
            .layer(middleware::request_id::propagate_request_id_layer())
            .layer(cors),
    )
}
