//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::ShortenedLink;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "slug": "aZ3k9Qx", "path": "/aZ3k9Qx" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for malformed JSON, an empty URL, or a non-HTTP(S) URL
/// - 500 Internal Server Error if no free slug could be allocated
/// - 503 Service Unavailable if the link store is unreachable
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;

    let link = state.shortening_service.shorten(&payload.url).await?;

    Ok(Json(ShortenedLink::from(&link).into()))
}
