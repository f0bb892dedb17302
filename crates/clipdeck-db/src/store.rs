use async_trait::async_trait;
use clipdeck_core::models::{Video, VideoSummary};
use clipdeck_core::AppError;
use uuid::Uuid;

/// A video document together with its concurrency token. The token is opaque
/// to callers: it is read with the document and handed back on replace.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredVideo {
    pub video: Video,
    pub version: i64,
}

/// Outcome of a version-checked whole-document replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The document matched the expected version and was replaced.
    Applied,
    /// The document exists but its version moved on; the caller's read is stale.
    VersionMismatch,
    /// The document no longer exists.
    Missing,
}

/// Document store operations for video documents.
///
/// Absence on `fetch` is a normal outcome (`None`), never an error; callers
/// branch on it explicitly. Every other backend failure is opaque and maps to
/// a 500-class error.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Idempotent existence-ensure of the backing table. Called once at
    /// startup; failure is fatal.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Create a new document with version 1.
    async fn insert(&self, video: &Video) -> Result<(), AppError>;

    /// Point read by id.
    async fn fetch(&self, id: Uuid) -> Result<Option<StoredVideo>, AppError>;

    /// Whole-document replace, guarded by the version token returned from the
    /// `fetch` that produced `video`.
    async fn replace(
        &self,
        id: Uuid,
        video: &Video,
        expected_version: i64,
    ) -> Result<ReplaceOutcome, AppError>;

    /// All videos projected without their comments, newest first.
    async fn list_summaries(&self) -> Result<Vec<VideoSummary>, AppError>;
}
