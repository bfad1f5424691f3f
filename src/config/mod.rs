use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::Placeholders;

pub const DEFAULT_STORAGE_BASE_URL: &str =
    "https://qlbmivkyeijvlktgitvk.supabase.co/storage/v1/media";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub placeholders: Placeholders,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            collection: default_collection(),
        }
    }
}

/// Connection settings for a CMS that exposes collections over REST.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// The subset of configuration the seeder itself reads.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub storage_base_url: String,
    pub collection: String,
    pub placeholders: Placeholders,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            storage_base_url: default_base_url(),
            collection: default_collection(),
            placeholders: Placeholders::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_STORAGE_BASE_URL.to_string()
}

fn default_db_path() -> String {
    "./data/media-seed.db".to_string()
}

fn default_collection() -> String {
    "media".to_string()
}

fn default_auth_scheme() -> String {
    "users".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run `media-seed init` to create one.",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_http_url("storage.base_url", &self.storage.base_url)?;

        let p = &self.placeholders;
        if p.width == 0 || p.height == 0 {
            anyhow::bail!("placeholders.width and placeholders.height must be greater than 0");
        }
        if p.thumbnail_width == 0 || p.thumbnail_height == 0 {
            anyhow::bail!(
                "placeholders.thumbnail_width and placeholders.thumbnail_height must be greater than 0"
            );
        }

        if self.database.path.trim().is_empty() {
            anyhow::bail!("database.path must not be empty");
        }
        if self.database.collection.trim().is_empty() {
            anyhow::bail!("database.collection must not be empty");
        }

        if let Some(remote) = &self.remote {
            validate_http_url("remote.api_url", &remote.api_url)?;
            if remote.timeout_secs == 0 {
                anyhow::bail!("remote.timeout_secs must be greater than 0");
            }
        }
        Ok(())
    }

    pub fn seed_config(&self) -> SeedConfig {
        SeedConfig {
            storage_base_url: self.storage.base_url.clone(),
            collection: self.database.collection.clone(),
            placeholders: self.placeholders.clone(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{} must not be empty", field);
    }
    let parsed = url::Url::parse(value)
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL ({}): {}", field, value, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("{} must use http or https, got '{}'", field, parsed.scheme());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.base_url, DEFAULT_STORAGE_BASE_URL);
        assert_eq!(config.database.collection, "media");
        assert_eq!(config.placeholders.filesize, 100_000);
        assert!(config.remote.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_placeholders_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [placeholders]
            width = 1024
            "#,
        )
        .unwrap();
        assert_eq!(config.placeholders.width, 1024);
        assert_eq!(config.placeholders.height, 600);
        assert_eq!(config.placeholders.thumbnail_filesize, 50_000);
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let mut config = Config::default();
        config.storage.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = Config::default();
        config.storage.base_url = "ftp://example.com/media".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut config = Config::default();
        config.placeholders.width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.placeholders.thumbnail_height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_remote_section_defaults() {
        let config: Config = toml::from_str(
            r#"
            [remote]
            api_url = "http://localhost:3000"
            "#,
        )
        .unwrap();
        let remote = config.remote.as_ref().unwrap();
        assert_eq!(remote.auth_scheme, "users");
        assert_eq!(remote.timeout_secs, 30);
        assert!(remote.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seed_config_carries_collection() {
        let mut config = Config::default();
        config.database.collection = "assets".to_string();
        let seed = config.seed_config();
        assert_eq!(seed.collection, "assets");
        assert_eq!(seed.storage_base_url, config.storage.base_url);
    }
}
