//! Storage abstraction trait

use async_trait::async_trait;
use bytes::Bytes;
use clipdeck_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

// Funnel storage failures into the unified taxonomy once, here. Detail stays
// server-side: AppError::Storage renders as a generic message to clients.
impl From<StorageError> for clipdeck_core::AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidKey(msg) => clipdeck_core::AppError::InvalidInput(msg),
            other => clipdeck_core::AppError::Storage(other.to_string()),
        }
    }
}

/// Storage abstraction trait
///
/// Keys are chosen by the caller; collision-freedom comes from deriving keys
/// from freshly generated video ids (`{id}.{extension}`).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload a blob under the given key and return its durable public URL.
    async fn upload(&self, key: &str, content_type: &str, data: Bytes) -> StorageResult<String>;

    /// Idempotent existence-ensure of the backing bucket/directory. Called
    /// once at startup, before the server accepts traffic; failure is fatal.
    async fn ensure_bucket(&self) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
