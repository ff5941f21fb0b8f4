//! Handlers for infrastructure endpoints: liveness, readiness, environment.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{EnvResponse, StatusResponse};
use crate::infrastructure::persistence::database;
use crate::state::AppState;

/// Liveness probe.
///
/// `GET /health` always returns `200 {"status":"ok"}`.
pub async fn health_handler() -> Json<StatusResponse> {
    Json(StatusResponse::new("ok"))
}

/// Readiness probe.
///
/// `GET /health/ready`
///
/// - **200** `{"status":"ready"}` when the database answers `SELECT 1`
/// - **503** `{"status":"not-ready"}` otherwise, including when the service
///   runs without a database
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<StatusResponse>) {
    let ready = match &state.database {
        Some(pool) => database::ping(pool).await,
        None => false,
    };

    if ready {
        (StatusCode::OK, Json(StatusResponse::new("ready")))
    } else {
        tracing::warn!("Readiness check failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusResponse::new("not-ready")),
        )
    }
}

/// Reports the active environment name.
///
/// `GET /env` returns `{"env":"dev"}`.
pub async fn env_handler(State(state): State<AppState>) -> Json<EnvResponse> {
    Json(EnvResponse {
        env: state.app_env.clone(),
    })
}
