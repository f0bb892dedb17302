//! Config-driven storage backend construction.

use std::sync::Arc;

use clipdeck_core::{Config, StorageBackend};

use crate::local::LocalStorage;
use crate::s3::S3Storage;
use crate::traits::{Storage, StorageError, StorageResult};

/// Build the storage backend selected by configuration.
///
/// Config validation has already guaranteed the backend-specific settings are
/// present; the checks here guard against construction bypassing validation.
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::S3 => {
            let region = config.s3_region.clone().ok_or_else(|| {
                StorageError::ConfigError("S3_REGION is required for the s3 backend".to_string())
            })?;
            let storage = S3Storage::new(
                config.s3_bucket.clone(),
                region,
                config.s3_endpoint.clone(),
            )
            .await?;
            Ok(Arc::new(storage))
        }
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError(
                    "LOCAL_STORAGE_PATH is required for the local backend".to_string(),
                )
            })?;
            let base_url = config.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::ConfigError(
                    "LOCAL_STORAGE_BASE_URL is required for the local backend".to_string(),
                )
            })?;
            Ok(Arc::new(LocalStorage::new(base_path, base_url)))
        }
    }
}
