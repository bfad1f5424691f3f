use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;

    db.migrate()?;

    println!("\n  {:<10} {:<30} {}", "Version", "Description", "Applied");
    println!("  {}", "-".repeat(60));
    for (version, description, applied_at) in db.get_migration_status()? {
        println!(
            "  {:<10} {:<30} {}",
            format!("{:03}", version),
            description,
            applied_at.as_deref().unwrap_or("pending")
        );
    }
    println!();

    tracing::info!("Migrations complete");
    Ok(())
}
