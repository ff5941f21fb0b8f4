//! Top-level router configuration combining infrastructure and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Placeholder landing page
//! - `GET  /health`        - Liveness probe
//! - `GET  /health/ready`  - Readiness probe (database ping)
//! - `GET  /env`           - Active environment name
//! - `/api/v1/*`           - Shortening, redirect and listing API
//!
//! Anything else falls through to a JSON 404.
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Path normalization** - Trailing slash handling
//! - **Request id** - `X-Request-ID` assigned when missing
//! - **Tracing** - Structured request/response logging
//! - **Request id propagation** - `X-Request-ID` echoed on the response
//! - **Compression** - gzip response bodies when the client accepts it

use crate::api;
use crate::api::handlers::{
    env_handler, fallback_handler, health_handler, readiness_handler, root_handler,
};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::{Layer, ServiceBuilder};
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, which a [`Router`] layer
/// cannot do, hence the [`NormalizePath`] wrapper.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and per-request middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/env", get(env_handler))
        .nest("/api/v1", api::routes::api_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(tracing::layer())
                .layer(request_id::propagate_layer())
                .layer(CompressionLayer::new()),
        )
}
