//! Application setup and initialization
//!
//! Startup order matters: configuration is validated first, then both backing
//! stores are provisioned (table and bucket existence-ensure) before the
//! router is built and the listener binds. Any failure here aborts the
//! process rather than serving degraded traffic.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use clipdeck_core::Config;
use clipdeck_db::{PgVideoStore, VideoStore};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_tracing();
    tracing::info!("Configuration loaded and validated successfully");

    // Document store: pool + table existence-ensure
    let pool = database::setup_database(&config).await?;
    let videos: Arc<dyn VideoStore> =
        Arc::new(PgVideoStore::new(pool, config.videos_table.clone()));
    videos
        .ensure_schema()
        .await
        .context("Failed to ensure video table")?;

    // Object store: client + bucket existence-ensure
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        videos,
        storage,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
