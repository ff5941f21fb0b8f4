//! Landing page and fallback handlers.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// `GET /` placeholder page.
pub async fn root_handler() -> &'static str {
    "Hello World!"
}

/// JSON 404 for unmatched routes.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Resource not found", json!({ "path": uri.path() }))
}
