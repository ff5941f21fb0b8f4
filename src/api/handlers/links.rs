//! Handler for link listing.

use axum::{Json, extract::State};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link, active or not.
///
/// # Endpoint
///
/// `GET /api/v1/links`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 1,
///     "slug": "aZ3k9Qx",
///     "targetUrl": "https://example.com",
///     "createdAt": "2025-01-01T12:00:00Z",
///     "isActive": true,
///     "expiresAt": null
///   }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_catalog.list_all().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
