//! API route configuration.

use crate::api::handlers::{list_links_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET  /links`   - List every stored link
/// - `POST /shorten` - Create a short link
/// - `GET  /{slug}`  - Redirect to the slug's target URL
///
/// The static `/links` route takes precedence over the `/{slug}` capture,
/// so `links` can never be served as a slug.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{slug}", get(redirect_handler))
}
