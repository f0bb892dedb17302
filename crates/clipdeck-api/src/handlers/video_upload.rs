use crate::error::HttpAppError;
use crate::services::upload::VideoUploadService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// Accept a multipart upload (`video` file, `title`, `description`), store the
/// blob, create the video document, and echo it back.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let service = VideoUploadService::new(&state);
    let video = service.upload(multipart).await.map_err(HttpAppError::from)?;

    Ok((StatusCode::CREATED, Json(video)))
}
