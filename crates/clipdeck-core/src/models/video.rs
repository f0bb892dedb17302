use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Comment;
use crate::validation::{truncate_chars, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};

/// A stored video document: one object-store blob plus this metadata record.
/// `id` doubles as the document's primary key and partition key so every store
/// operation is a single-partition point read or replace. After creation only
/// `comments` ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Generated storage key, `{id}.{extension}`.
    pub blob_name: String,
    /// Locator returned by the object store at upload time, stored verbatim.
    pub blob_url: String,
    pub created_at: DateTime<Utc>,
    /// Newest first; new comments are prepended.
    pub comments: Vec<Comment>,
}

impl Video {
    /// Build a video document from validated upload input, applying silent
    /// truncation to `title` and `description`.
    pub fn new(id: Uuid, title: &str, description: &str, blob_name: String, blob_url: String) -> Self {
        Video {
            id,
            title: truncate_chars(title, TITLE_MAX_CHARS),
            description: truncate_chars(description, DESCRIPTION_MAX_CHARS),
            blob_name,
            blob_url,
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    /// Insert a comment at the head of the list, keeping newest-first order.
    pub fn prepend_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn comment(&self, comment_id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Remove and return the comment with the given id, if present.
    pub fn remove_comment(&mut self, comment_id: Uuid) -> Option<Comment> {
        let idx = self.comments.iter().position(|c| c.id == comment_id)?;
        Some(self.comments.remove(idx))
    }
}

/// List projection of a video: everything except `comments`, which is excluded
/// to bound response size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub blob_url: String,
    pub blob_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Video> for VideoSummary {
    fn from(video: &Video) -> Self {
        VideoSummary {
            id: video.id,
            title: video.title.clone(),
            description: video.description.clone(),
            blob_url: video.blob_url.clone(),
            blob_name: video.blob_name.clone(),
            created_at: video.created_at,
        }
    }
}
