use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use clipdeck_core::models::VideoSummary;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ListVideosResponse {
    pub items: Vec<VideoSummary>,
}

/// All videos, newest first, projected without their comments.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let items = state
        .videos
        .list_summaries()
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(ListVideosResponse { items }))
}
