//! Storage setup and initialization

use anyhow::{Context, Result};
use clipdeck_core::Config;
use clipdeck_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the configured storage backend and ensure its bucket exists.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(backend = %config.storage_backend, "Initializing storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to build storage backend")?;

    storage
        .ensure_bucket()
        .await
        .context("Failed to ensure storage bucket")?;

    tracing::info!(backend = %storage.backend_type(), "Storage initialized successfully");

    Ok(storage)
}
