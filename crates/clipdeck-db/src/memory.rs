use std::collections::HashMap;

use async_trait::async_trait;
use clipdeck_core::models::{Video, VideoSummary};
use clipdeck_core::AppError;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{ReplaceOutcome, StoredVideo, VideoStore};

/// In-memory video document store for development and tests.
///
/// Semantics match the Postgres backend exactly, including version tokens, so
/// the mutation protocol exercises the same code paths against either.
#[derive(Default)]
pub struct MemoryVideoStore {
    inner: RwLock<HashMap<Uuid, StoredVideo>>,
}

impl MemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, video: &Video) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        if inner.contains_key(&video.id) {
            return Err(AppError::Internal(format!(
                "Video {} already exists",
                video.id
            )));
        }
        inner.insert(
            video.id,
            StoredVideo {
                video: video.clone(),
                version: 1,
            },
        );
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<StoredVideo>, AppError> {
        Ok(self.inner.read().await.get(&id).cloned())
    }

    async fn replace(
        &self,
        id: Uuid,
        video: &Video,
        expected_version: i64,
    ) -> Result<ReplaceOutcome, AppError> {
        let mut inner = self.inner.write().await;
        match inner.get_mut(&id) {
            None => Ok(ReplaceOutcome::Missing),
            Some(stored) if stored.version != expected_version => {
                Ok(ReplaceOutcome::VersionMismatch)
            }
            Some(stored) => {
                stored.video = video.clone();
                stored.version += 1;
                Ok(ReplaceOutcome::Applied)
            }
        }
    }

    async fn list_summaries(&self) -> Result<Vec<VideoSummary>, AppError> {
        let inner = self.inner.read().await;
        let mut summaries: Vec<VideoSummary> = inner
            .values()
            .map(|stored| VideoSummary::from(&stored.video))
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipdeck_core::models::Comment;

    fn test_video(title: &str) -> Video {
        Video::new(
            Uuid::new_v4(),
            title,
            "",
            "k.mp4".to_string(),
            "http://localhost/k.mp4".to_string(),
        )
    }

    #[tokio::test]
    async fn test_insert_then_fetch() {
        let store = MemoryVideoStore::new();
        let video = test_video("Intro");
        store.insert(&video).await.expect("insert");

        let stored = store
            .fetch(video.id)
            .await
            .expect("fetch")
            .expect("present");
        assert_eq!(stored.video, video);
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_fetch_absent_is_none() {
        let store = MemoryVideoStore::new();
        assert!(store.fetch(Uuid::new_v4()).await.expect("fetch").is_none());
    }

    #[tokio::test]
    async fn test_replace_bumps_version() {
        let store = MemoryVideoStore::new();
        let video = test_video("Intro");
        store.insert(&video).await.expect("insert");

        let mut updated = video.clone();
        updated.prepend_comment(Comment::new("u1", None, "hi"));

        let outcome = store.replace(video.id, &updated, 1).await.expect("replace");
        assert_eq!(outcome, ReplaceOutcome::Applied);

        let stored = store
            .fetch(video.id)
            .await
            .expect("fetch")
            .expect("present");
        assert_eq!(stored.version, 2);
        assert_eq!(stored.video.comments.len(), 1);
    }

    #[tokio::test]
    async fn test_stale_replace_is_rejected() {
        let store = MemoryVideoStore::new();
        let video = test_video("Intro");
        store.insert(&video).await.expect("insert");

        // First writer wins with the token it read.
        let mut a = video.clone();
        a.prepend_comment(Comment::new("u1", None, "from a"));
        assert_eq!(
            store.replace(video.id, &a, 1).await.expect("replace"),
            ReplaceOutcome::Applied
        );

        // Second writer still holds the stale token.
        let mut b = video.clone();
        b.prepend_comment(Comment::new("u2", None, "from b"));
        assert_eq!(
            store.replace(video.id, &b, 1).await.expect("replace"),
            ReplaceOutcome::VersionMismatch
        );

        // The first mutation survived.
        let stored = store
            .fetch(video.id)
            .await
            .expect("fetch")
            .expect("present");
        assert_eq!(stored.video.comments[0].text, "from a");
    }

    #[tokio::test]
    async fn test_replace_missing_document() {
        let store = MemoryVideoStore::new();
        let video = test_video("Intro");
        assert_eq!(
            store.replace(video.id, &video, 1).await.expect("replace"),
            ReplaceOutcome::Missing
        );
    }

    #[tokio::test]
    async fn test_list_is_newest_first_without_comments() {
        let store = MemoryVideoStore::new();
        let mut older = test_video("older");
        older.created_at = chrono::Utc::now() - chrono::Duration::minutes(5);
        let newer = test_video("newer");

        store.insert(&older).await.expect("insert");
        store.insert(&newer).await.expect("insert");

        let summaries = store.list_summaries().await.expect("list");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].title, "newer");
        assert_eq!(summaries[1].title, "older");
    }
}
