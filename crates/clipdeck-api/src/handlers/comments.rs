use crate::error::{HttpAppError, ValidatedJson};
use crate::services::comments::CommentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use clipdeck_core::models::Comment;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub user_id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AddCommentResponse {
    pub ok: bool,
    pub comment: Comment,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let service = CommentService::new(&state.videos);
    let comment = service
        .add_comment(
            video_id,
            &request.user_id,
            request.author_name.as_deref(),
            &request.text,
        )
        .await
        .map_err(HttpAppError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(AddCommentResponse { ok: true, comment }),
    ))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path((video_id, comment_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(request): ValidatedJson<DeleteCommentRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let service = CommentService::new(&state.videos);
    service
        .delete_comment(video_id, comment_id, &request.user_id)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(AckResponse { ok: true }))
}
