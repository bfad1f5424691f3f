use crate::services::media;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

use super::MediaCommand;

pub async fn run(config_path: &Path, command: MediaCommand) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;

    match command {
        MediaCommand::List { limit } => {
            let records = media::list_media(&db, limit, 0)?;
            let total = media::count_media(&db)?;

            println!("{:<38} {:<32} {:<12} {}", "ID", "FILENAME", "MIME", "URL");
            println!("{}", "-".repeat(100));
            for record in &records {
                println!(
                    "{:<38} {:<32} {:<12} {}",
                    record.id, record.filename, record.mime_type, record.url
                );
            }
            println!("\n{} of {} record(s) shown", records.len(), total);
        }
    }

    Ok(())
}
