//! Comment mutations over the video document store.
//!
//! Every mutation is a whole-document read-modify-write: fetch the video with
//! its version token, rebuild the comments list in memory, replace the
//! document with the token attached. A stale token means a concurrent writer
//! replaced the document between our read and our write; the cycle restarts
//! from a fresh read, bounded by `MAX_REPLACE_ATTEMPTS`, and surfaces a
//! conflict error once exhausted. This is the only retry in the system.

use std::sync::Arc;

use clipdeck_core::models::Comment;
use clipdeck_core::validation::{truncate_chars, USER_ID_MAX_CHARS};
use clipdeck_core::AppError;
use clipdeck_db::{ReplaceOutcome, VideoStore};
use uuid::Uuid;

const MAX_REPLACE_ATTEMPTS: u32 = 3;

pub struct CommentService<'a> {
    videos: &'a Arc<dyn VideoStore>,
}

impl<'a> CommentService<'a> {
    pub fn new(videos: &'a Arc<dyn VideoStore>) -> Self {
        Self { videos }
    }

    /// Add a comment to a video, prepending it so the list stays newest-first.
    /// Returns the created comment.
    pub async fn add_comment(
        &self,
        video_id: Uuid,
        user_id: &str,
        author_name: Option<&str>,
        text: &str,
    ) -> Result<Comment, AppError> {
        let user_id = truncate_chars(user_id.trim(), USER_ID_MAX_CHARS);
        if user_id.is_empty() {
            return Err(AppError::InvalidInput("userId is required".to_string()));
        }
        if text.trim().is_empty() {
            return Err(AppError::InvalidInput("text is required".to_string()));
        }

        let comment = Comment::new(&user_id, author_name, text);

        for attempt in 1..=MAX_REPLACE_ATTEMPTS {
            let stored = self
                .videos
                .fetch(video_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

            let mut video = stored.video;
            video.prepend_comment(comment.clone());

            match self
                .videos
                .replace(video_id, &video, stored.version)
                .await?
            {
                ReplaceOutcome::Applied => {
                    tracing::info!(
                        video_id = %video_id,
                        comment_id = %comment.id,
                        "Comment added"
                    );
                    return Ok(comment);
                }
                ReplaceOutcome::Missing => {
                    return Err(AppError::NotFound("Video not found".to_string()));
                }
                ReplaceOutcome::VersionMismatch => {
                    tracing::debug!(
                        video_id = %video_id,
                        attempt,
                        "Concurrent update detected, retrying comment add"
                    );
                }
            }
        }

        Err(conflict(video_id))
    }

    /// Delete a comment. The supplied `userId` must exactly equal the stored
    /// comment's `userId`; a mismatch leaves the document untouched.
    pub async fn delete_comment(
        &self,
        video_id: Uuid,
        comment_id: Uuid,
        user_id: &str,
    ) -> Result<(), AppError> {
        let user_id = truncate_chars(user_id.trim(), USER_ID_MAX_CHARS);
        if user_id.is_empty() {
            return Err(AppError::InvalidInput("userId is required".to_string()));
        }

        for attempt in 1..=MAX_REPLACE_ATTEMPTS {
            let stored = self
                .videos
                .fetch(video_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

            // Ownership is re-checked on every attempt: a concurrent writer
            // may have removed the comment since the previous read.
            let owner = stored
                .video
                .comment(comment_id)
                .map(|c| c.user_id.clone())
                .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;
            if owner != user_id {
                return Err(AppError::Forbidden(
                    "userId does not match the comment's author".to_string(),
                ));
            }

            let mut video = stored.video;
            video.remove_comment(comment_id);

            match self
                .videos
                .replace(video_id, &video, stored.version)
                .await?
            {
                ReplaceOutcome::Applied => {
                    tracing::info!(
                        video_id = %video_id,
                        comment_id = %comment_id,
                        "Comment deleted"
                    );
                    return Ok(());
                }
                ReplaceOutcome::Missing => {
                    return Err(AppError::NotFound("Video not found".to_string()));
                }
                ReplaceOutcome::VersionMismatch => {
                    tracing::debug!(
                        video_id = %video_id,
                        attempt,
                        "Concurrent update detected, retrying comment delete"
                    );
                }
            }
        }

        Err(conflict(video_id))
    }
}

fn conflict(video_id: Uuid) -> AppError {
    AppError::Conflict(format!(
        "Video {} was modified concurrently too many times; please retry",
        video_id
    ))
}
