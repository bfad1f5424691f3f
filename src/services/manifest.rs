use crate::models::AssetDescriptor;
use crate::services::seed::{validate_assets, SeedError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "asset")]
    assets: Vec<AssetDescriptor>,
}

/// Read an asset list from a TOML file of `[[asset]]` tables.
pub fn load_manifest(path: &Path) -> Result<Vec<AssetDescriptor>, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|e| SeedError::Manifest {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_manifest(&content).map_err(|e| match e {
        SeedError::Manifest { reason, .. } => SeedError::Manifest {
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })
}

pub fn parse_manifest(content: &str) -> Result<Vec<AssetDescriptor>, SeedError> {
    let manifest: Manifest = toml::from_str(content).map_err(|e| SeedError::Manifest {
        path: "<inline>".to_string(),
        reason: e.to_string(),
    })?;
    validate_assets(&manifest.assets)?;
    Ok(manifest.assets)
}
