//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::application::services::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /api/v1/{slug}`
///
/// # Behavior
///
/// - Active, unexpired link: `302 Found` with `Location: <targetUrl>`
/// - Empty, unknown, inactive or expired slug: `404 Not Found`; the reason
///   is reported in `error.details.reason`
///
/// # Errors
///
/// Returns 503 Service Unavailable if the link store is unreachable.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.redirect_resolver.resolve(&slug).await? {
        Resolution::Redirect(target_url) => {
            let location = HeaderValue::try_from(target_url.as_str()).map_err(|_| {
                AppError::internal(
                    "Stored target URL is not a valid Location header",
                    json!({ "slug": slug }),
                )
            })?;

            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Resolution::NotFound(reason) => Err(AppError::not_found(
            "Short link not found",
            json!({ "slug": slug.trim(), "reason": reason.as_str() }),
        )),
    }
}
