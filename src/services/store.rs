//! The record store seam.
//!
//! The seeder only ever talks to a [`RecordStore`]: one readiness check before
//! the batch, then one `create` per asset. The SQLite [`Database`] implements
//! it directly; the REST-backed store lives in `services::remote`.

use crate::models::{CreatedRecord, MediaPayload};
use crate::Database;
use chrono::SecondsFormat;
use rusqlite::ErrorCode;
use thiserror::Error;
use uuid::Uuid;

pub const MEDIA_COLLECTION: &str = "media";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Collection '{0}' is not set up; run `media-seed migrate` first")]
    NotMigrated(String),

    #[error("Record rejected: {0}")]
    Rejected(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[cfg(feature = "remote")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait RecordStore {
    /// Checked once before any record is created. An error here aborts the
    /// whole batch.
    fn ensure_ready(&self, collection: &str) -> StoreResult<()>;

    fn create(&self, collection: &str, payload: &MediaPayload) -> StoreResult<CreatedRecord>;
}

impl RecordStore for Database {
    fn ensure_ready(&self, collection: &str) -> StoreResult<()> {
        if collection != MEDIA_COLLECTION {
            return Err(StoreError::UnknownCollection(collection.to_string()));
        }

        let conn = self.checkout()?;
        let tables: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            [collection],
            |row| row.get(0),
        )?;
        if tables == 0 {
            return Err(StoreError::NotMigrated(collection.to_string()));
        }
        Ok(())
    }

    fn create(&self, collection: &str, payload: &MediaPayload) -> StoreResult<CreatedRecord> {
        if collection != MEDIA_COLLECTION {
            return Err(StoreError::UnknownCollection(collection.to_string()));
        }

        let id = Uuid::new_v4().to_string();
        let sizes = serde_json::to_string(&payload.sizes)?;
        let created_at = payload
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let updated_at = payload
            .updated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let conn = self.checkout()?;
        conn.execute(
            "INSERT INTO media (id, alt, filename, mime_type, filesize, width, height, url, thumbnail_url, sizes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                id,
                payload.alt,
                payload.filename,
                payload.mime_type.as_str(),
                payload.filesize as i64,
                payload.width,
                payload.height,
                payload.url,
                payload.thumbnail_url,
                sizes,
                created_at,
                updated_at,
            ],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(ref err, _)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                StoreError::Rejected(format!(
                    "a media record for '{}' already exists",
                    payload.filename
                ))
            }
            other => StoreError::Database(other),
        })?;

        Ok(CreatedRecord { id })
    }
}
