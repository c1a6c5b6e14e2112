//! Liveness endpoint.

use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /health - Report that the process is serving requests
///
/// Does not contact the processor.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
