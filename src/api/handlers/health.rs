use axum::Json;
use chrono::Utc;

use crate::models::PingResponse;

/// Liveness check; answers whether or not a service is attached
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
