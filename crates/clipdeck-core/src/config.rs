//! Configuration module
//!
//! Environment-driven configuration, loaded once at startup and passed by
//! reference into setup and handlers. There is no ambient global config.

use std::env;

use crate::storage_types::StorageBackend;
use crate::validation::is_valid_table_name;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_VIDEOS_TABLE: &str = "videos";
const DEFAULT_S3_BUCKET: &str = "videos";
const DEFAULT_MAX_VIDEO_SIZE_BYTES: usize = 250 * 1024 * 1024;
const DEFAULT_MAX_JSON_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    // Document store
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_timeout_secs: u64,
    pub videos_table: String,
    // Object store
    pub storage_backend: StorageBackend,
    pub s3_bucket: String,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...).
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Transport body ceilings
    pub max_video_size_bytes: usize,
    pub max_json_body_bytes: usize,
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T, anyhow::Error> {
    match env_opt(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{} is not a valid value for {}", raw, key)),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let database_url = env_opt("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable not set"))?;

        let storage_backend = match env_opt("STORAGE_BACKEND") {
            Some(raw) => StorageBackend::parse(&raw)
                .ok_or_else(|| anyhow::anyhow!("Unknown STORAGE_BACKEND: {}", raw))?,
            None => StorageBackend::S3,
        };

        let cors_origins = env_opt("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            cors_origins,
            database_url,
            database_max_connections: env_parse(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
            database_timeout_secs: env_parse("DATABASE_TIMEOUT_SECS", DEFAULT_DB_TIMEOUT_SECS)?,
            videos_table: env_opt("VIDEOS_TABLE")
                .unwrap_or_else(|| DEFAULT_VIDEOS_TABLE.to_string()),
            storage_backend,
            s3_bucket: env_opt("S3_BUCKET").unwrap_or_else(|| DEFAULT_S3_BUCKET.to_string()),
            s3_region: env_opt("S3_REGION").or_else(|| env_opt("AWS_REGION")),
            s3_endpoint: env_opt("S3_ENDPOINT"),
            local_storage_path: env_opt("LOCAL_STORAGE_PATH"),
            local_storage_base_url: env_opt("LOCAL_STORAGE_BASE_URL"),
            max_video_size_bytes: env_parse("MAX_VIDEO_SIZE_BYTES", DEFAULT_MAX_VIDEO_SIZE_BYTES)?,
            max_json_body_bytes: env_parse("MAX_JSON_BODY_BYTES", DEFAULT_MAX_JSON_BODY_BYTES)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail fast on misconfiguration before any backing service is touched.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !is_valid_table_name(&self.videos_table) {
            anyhow::bail!(
                "VIDEOS_TABLE '{}' is not a valid identifier (lowercase letters, digits, underscores)",
                self.videos_table
            );
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.trim().is_empty() {
                    anyhow::bail!("S3_BUCKET must not be empty");
                }
                if self.s3_region.is_none() {
                    anyhow::bail!("S3_REGION (or AWS_REGION) must be set for the s3 backend");
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    anyhow::bail!("LOCAL_STORAGE_PATH must be set for the local backend");
                }
                if self.local_storage_base_url.is_none() {
                    anyhow::bail!("LOCAL_STORAGE_BASE_URL must be set for the local backend");
                }
            }
        }

        if self.max_video_size_bytes == 0 || self.max_json_body_bytes == 0 {
            anyhow::bail!("Body size ceilings must be greater than zero");
        }

        Ok(())
    }
}
