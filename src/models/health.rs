use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload for `GET /api/v1/health`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "cache_backend": "memory"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Which store backs the MX cache ("memory" or "redis")
    pub cache_backend: String,
}

impl HealthResponse {
    pub fn up(cache_backend: &str) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            cache_backend: cache_backend.to_string(),
        }
    }
}
