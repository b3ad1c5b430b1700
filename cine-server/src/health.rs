use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /api/health - unauthenticated liveness check
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}
