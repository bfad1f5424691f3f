use crate::config::DEFAULT_STORAGE_BASE_URL;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "media-seed.toml";

pub async fn run(path: PathBuf) -> Result<()> {
    let config_path = write_default_config(&path)?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Check [storage].base_url against your bucket before seeding");
    tracing::info!("Run 'media-seed migrate' to set up the database");
    tracing::info!("Run 'media-seed seed' to create the media records");

    Ok(())
}

pub fn write_default_config(path: &Path) -> Result<PathBuf> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    std::fs::create_dir_all(path)?;
    std::fs::create_dir_all(path.join("data"))?;

    let config = format!(
        r#"[storage]
base_url = "{}"

[placeholders]
filesize = 100000
width = 800
height = 600
thumbnail_width = 400
thumbnail_height = 300
thumbnail_filesize = 50000

[database]
path = "./data/media-seed.db"
collection = "media"

# Uncomment to seed through a CMS REST API with `media-seed seed --remote`.
# [remote]
# api_url = "http://localhost:3000"
# api_key = ""
# auth_scheme = "users"
# timeout_secs = 30
"#,
        DEFAULT_STORAGE_BASE_URL
    );

    std::fs::write(&config_path, config)?;
    Ok(config_path)
}
