use crate::models::{MediaRecord, MediaSizes};
use crate::Database;
use anyhow::Result;
use rusqlite::{OptionalExtension, Row};

const MEDIA_COLUMNS: &str =
    "id, alt, filename, mime_type, filesize, width, height, url, thumbnail_url, sizes, created_at, updated_at";

fn row_to_media(row: &Row<'_>) -> rusqlite::Result<MediaRecord> {
    let sizes_json: String = row.get(9)?;
    let sizes: MediaSizes = serde_json::from_str(&sizes_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(9, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(MediaRecord {
        id: row.get(0)?,
        alt: row.get(1)?,
        filename: row.get(2)?,
        mime_type: row.get(3)?,
        filesize: row.get(4)?,
        width: row.get(5)?,
        height: row.get(6)?,
        url: row.get(7)?,
        thumbnail_url: row.get(8)?,
        sizes,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

pub fn list_media(db: &Database, limit: usize, offset: usize) -> Result<Vec<MediaRecord>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM media ORDER BY created_at ASC, rowid ASC LIMIT ? OFFSET ?",
        MEDIA_COLUMNS
    ))?;
    let media = stmt
        .query_map((limit as i64, offset as i64), row_to_media)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(media)
}

pub fn get_media_by_filename(db: &Database, filename: &str) -> Result<Option<MediaRecord>> {
    let conn = db.get()?;
    let media = conn
        .query_row(
            &format!("SELECT {} FROM media WHERE filename = ?", MEDIA_COLUMNS),
            [filename],
            row_to_media,
        )
        .optional()?;
    Ok(media)
}

pub fn get_media(db: &Database, id: &str) -> Result<Option<MediaRecord>> {
    let conn = db.get()?;
    let media = conn
        .query_row(
            &format!("SELECT {} FROM media WHERE id = ?", MEDIA_COLUMNS),
            [id],
            row_to_media,
        )
        .optional()?;
    Ok(media)
}

pub fn count_media(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM media", [], |row| row.get(0))?;
    Ok(count)
}
