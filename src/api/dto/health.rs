//! DTOs for health and environment endpoints.

use serde::{Deserialize, Serialize};

/// `{"status": "..."}` body used by liveness and readiness checks.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// `{"env": "..."}` body reporting the active environment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvResponse {
    pub env: String,
}
