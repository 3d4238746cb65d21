//! HTTP surface.
//!
//! | Route                | Purpose                                        |
//! |----------------------|------------------------------------------------|
//! | `GET /auth`          | redirect to the Shopify authorization page     |
//! | `GET /auth/callback` | verify the callback, exchange the code         |
//! | `POST /api/files`    | catalog for the `{shop, token}` in the body    |
//! | `GET /api/files`     | catalog for the configured standalone shop     |
//! | `GET /health`        | liveness                                       |
//!
//! Failures are rendered as [`ApiError`] bodies.

mod error;
mod routes;
mod state;

pub use error::{ApiError, ErrorDetail, ServerError};
pub use routes::{AuthQuery, FilesRequest};
pub use state::AppState;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the router with all routes and the request trace layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/auth", get(routes::auth))
        .route("/auth/callback", get(routes::auth_callback))
        .route(
            "/api/files",
            get(routes::list_configured_files).post(routes::list_files),
        )
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `0.0.0.0:{port}` and serves until the process exits.
///
/// # Errors
///
/// Returns an I/O error if the port cannot be bound or the server fails.
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let oauth_ready = state.config.api_key().is_some() && state.config.redirect_uri().is_some();
    let standalone = state.standalone.is_some();

    let app = create_router(state);

    tracing::info!(%addr, "binding server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, oauth_ready, standalone, "server listening");

    axum::serve(listener, app).await
}
