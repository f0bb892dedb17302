//! Service identity and liveness endpoints.

use axum::{response::IntoResponse, Json};
use chrono::Utc;

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "clipdeck",
        "ok": true,
        "time": Utc::now(),
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "ok": true,
        "time": Utc::now(),
    }))
}
