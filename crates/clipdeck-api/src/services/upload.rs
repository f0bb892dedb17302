//! Video upload service: multipart parsing, upload validation, and the
//! object-store → document-store creation flow.

use axum::extract::Multipart;
use bytes::Bytes;
use clipdeck_core::models::Video;
use clipdeck_core::validation::{file_extension, is_video_content_type};
use clipdeck_core::AppError;
use uuid::Uuid;

use crate::state::AppState;

/// Multipart form field names accepted by the upload endpoint.
const FIELD_VIDEO: &str = "video";
const FIELD_TITLE: &str = "title";
const FIELD_DESCRIPTION: &str = "description";

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Bytes,
}

pub struct VideoUploadService<'a> {
    state: &'a AppState,
}

impl<'a> VideoUploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Handle one upload: validate the form, write the blob, create the
    /// document. The storage key is `{id}.{ext}` with a freshly generated id,
    /// which guarantees collision-freedom.
    pub async fn upload(&self, multipart: Multipart) -> Result<Video, AppError> {
        let (title, description, file) = read_form(multipart).await?;

        let title = title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput("title is required".to_string()));
        }
        let description = description.unwrap_or_default();

        let file = file.ok_or_else(|| {
            AppError::InvalidInput("video file field 'video' is required".to_string())
        })?;
        if file.data.is_empty() {
            return Err(AppError::InvalidInput("video file is empty".to_string()));
        }
        if !is_video_content_type(&file.content_type) {
            return Err(AppError::InvalidInput(format!(
                "content type '{}' is not a video media type",
                file.content_type
            )));
        }

        let id = Uuid::new_v4();
        let blob_name = format!("{}.{}", id, file_extension(&file.file_name));
        let size = file.data.len();

        let blob_url = self
            .state
            .storage
            .upload(&blob_name, &file.content_type, file.data)
            .await?;

        let video = Video::new(id, &title, &description, blob_name.clone(), blob_url);
        self.state.videos.insert(&video).await?;

        tracing::info!(
            video_id = %video.id,
            blob_name = %blob_name,
            size_bytes = size,
            "Video uploaded"
        );

        Ok(video)
    }
}

/// Walk the multipart form once, collecting the fields this endpoint accepts.
/// Unknown fields are ignored.
async fn read_form(
    mut multipart: Multipart,
) -> Result<(Option<String>, Option<String>, Option<UploadedFile>), AppError> {
    let mut title = None;
    let mut description = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid multipart request: {}", e)))?
    {
        // Field metadata is borrowed from the field; copy it out before the
        // consuming reads below.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FIELD_TITLE => {
                title = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Invalid title field: {}", e))
                })?);
            }
            FIELD_DESCRIPTION => {
                description = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Invalid description field: {}", e))
                })?);
            }
            FIELD_VIDEO => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read video file: {}", e))
                })?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    Ok((title, description, file))
}
