use super::MimeType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed dimensions and sizes written for every seeded record. The files
/// themselves are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Placeholders {
    #[serde(default = "default_filesize")]
    pub filesize: u64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u32,
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: u32,
    #[serde(default = "default_thumbnail_filesize")]
    pub thumbnail_filesize: u64,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            filesize: default_filesize(),
            width: default_width(),
            height: default_height(),
            thumbnail_width: default_thumbnail_width(),
            thumbnail_height: default_thumbnail_height(),
            thumbnail_filesize: default_thumbnail_filesize(),
        }
    }
}

fn default_filesize() -> u64 {
    100_000
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_thumbnail_width() -> u32 {
    400
}

fn default_thumbnail_height() -> u32 {
    300
}

fn default_thumbnail_filesize() -> u64 {
    50_000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailSize {
    pub width: u32,
    pub height: u32,
    pub mime_type: MimeType,
    pub filesize: u64,
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSizes {
    pub thumbnail: ThumbnailSize,
}

/// Field-value payload handed to a record store's `create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub alt: String,
    pub filename: String,
    pub mime_type: MimeType,
    pub filesize: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    pub sizes: MediaSizes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A media row as stored by the SQLite record store.
#[derive(Debug, Clone, Serialize)]
pub struct MediaRecord {
    pub id: String,
    pub alt: String,
    pub filename: String,
    pub mime_type: String,
    pub filesize: i64,
    pub width: i64,
    pub height: i64,
    pub url: String,
    pub thumbnail_url: String,
    pub sizes: MediaSizes,
    pub created_at: String,
    pub updated_at: String,
}

/// What a store hands back after a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: String,
}
