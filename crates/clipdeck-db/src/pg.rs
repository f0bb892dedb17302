use async_trait::async_trait;
use clipdeck_core::models::{Video, VideoSummary};
use clipdeck_core::AppError;
use serde_json::Value as JsonValue;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::store::{ReplaceOutcome, StoredVideo, VideoStore};

#[derive(sqlx::FromRow)]
struct DocRow {
    doc: JsonValue,
    version: i64,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    doc: JsonValue,
}

/// Postgres-backed video document store.
///
/// One row per video: `id UUID PRIMARY KEY, created_at TIMESTAMPTZ,
/// version BIGINT, doc JSONB`. The table name comes from configuration and
/// has been validated as a strict identifier before it reaches this type.
#[derive(Clone)]
pub struct PgVideoStore {
    pool: PgPool,
    table: String,
}

impl PgVideoStore {
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    /// Deserialize a stored document, rejecting documents missing required
    /// fields instead of propagating absence.
    fn decode(doc: JsonValue) -> Result<Video, AppError> {
        serde_json::from_value(doc)
            .map_err(|e| AppError::Internal(format!("Malformed video document: {}", e)))
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id UUID PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL,
                version BIGINT NOT NULL,
                doc JSONB NOT NULL
            )",
            table = self.table
        );
        sqlx::query(&ddl).execute(&self.pool).await?;

        let index = format!(
            "CREATE INDEX IF NOT EXISTS {table}_created_at_idx
             ON {table} (created_at DESC)",
            table = self.table
        );
        sqlx::query(&index).execute(&self.pool).await?;

        tracing::info!(table = %self.table, "Video table ensured");
        Ok(())
    }

    async fn insert(&self, video: &Video) -> Result<(), AppError> {
        let doc = serde_json::to_value(video)?;
        let sql = format!(
            "INSERT INTO {table} (id, created_at, version, doc) VALUES ($1, $2, 1, $3)",
            table = self.table
        );
        sqlx::query(&sql)
            .bind(video.id)
            .bind(video.created_at)
            .bind(&doc)
            .execute(&self.pool)
            .await?;

        tracing::debug!(video_id = %video.id, "Video document created");
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<StoredVideo>, AppError> {
        let sql = format!(
            "SELECT doc, version FROM {table} WHERE id = $1",
            table = self.table
        );
        let row: Option<DocRow> = sqlx::query_as::<Postgres, DocRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(StoredVideo {
                video: Self::decode(row.doc)?,
                version: row.version,
            })),
            None => Ok(None),
        }
    }

    async fn replace(
        &self,
        id: Uuid,
        video: &Video,
        expected_version: i64,
    ) -> Result<ReplaceOutcome, AppError> {
        let doc = serde_json::to_value(video)?;
        let sql = format!(
            "UPDATE {table} SET doc = $3, version = version + 1
             WHERE id = $1 AND version = $2",
            table = self.table
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(expected_version)
            .bind(&doc)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 1 {
            return Ok(ReplaceOutcome::Applied);
        }

        // Zero rows: stale version or the document vanished.
        let probe = format!("SELECT 1 FROM {table} WHERE id = $1", table = self.table);
        let exists = sqlx::query(&probe)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .is_some();

        if exists {
            tracing::debug!(video_id = %id, expected_version, "Stale replace rejected");
            Ok(ReplaceOutcome::VersionMismatch)
        } else {
            Ok(ReplaceOutcome::Missing)
        }
    }

    async fn list_summaries(&self) -> Result<Vec<VideoSummary>, AppError> {
        // Comments are stripped in the projection to bound response size.
        let sql = format!(
            "SELECT doc - 'comments' AS doc FROM {table} ORDER BY created_at DESC",
            table = self.table
        );
        let rows: Vec<SummaryRow> = sqlx::query_as::<Postgres, SummaryRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row.doc)
                    .map_err(|e| AppError::Internal(format!("Malformed video document: {}", e)))
            })
            .collect()
    }
}
