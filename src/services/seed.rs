use crate::config::SeedConfig;
use crate::models::{
    AssetDescriptor, MediaPayload, MediaSizes, MimeType, SeedOutcome, SeedReport, ThumbnailSize,
};
use crate::services::store::{RecordStore, StoreError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;

/// Files already uploaded to the media bucket, in seeding order.
pub const ASSETS: &[(&str, &str)] = &[
    ("logo.png", "Company Logo"),
    ("athletic-running-pro.jpg", "Athletic Running Pro Shoes"),
    ("athletic-training-flex.jpg", "Athletic Training Flex Shoes"),
    ("featured-bestseller.jpg", "Featured Bestseller Shoes"),
    ("hero-lifestyle.png", "Hero Lifestyle Image"),
    ("hero-running-shoes.png", "Hero Running Shoes"),
    ("mens-dress-oxford.jpg", "Men's Dress Oxford Shoes"),
    ("mens-sneaker-urban.jpg", "Men's Urban Sneakers"),
    ("womens-flat-comfort.jpg", "Women's Comfort Flats"),
    ("womens-heel-elegant.jpg", "Women's Elegant Heels"),
];

pub fn builtin_assets() -> Vec<AssetDescriptor> {
    ASSETS
        .iter()
        .map(|(filename, alt)| AssetDescriptor::new(*filename, *alt))
        .collect()
}

/// Errors that abort a seeding pass before any per-item work is reported.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Asset list is empty")]
    EmptyAssetList,

    #[error("Invalid asset '{filename}': {reason}")]
    InvalidAsset { filename: String, reason: String },

    #[error("Asset '{0}' is listed more than once")]
    DuplicateAsset(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Could not load asset manifest '{path}': {reason}")]
    Manifest { path: String, reason: String },
}

pub fn derive_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}

pub fn build_payload(
    asset: &AssetDescriptor,
    config: &SeedConfig,
    now: DateTime<Utc>,
) -> MediaPayload {
    let url = derive_url(&config.storage_base_url, &asset.filename);
    let mime_type = MimeType::from_filename(&asset.filename);
    let p = &config.placeholders;

    MediaPayload {
        alt: asset.alt.clone(),
        filename: asset.filename.clone(),
        mime_type,
        filesize: p.filesize,
        width: p.width,
        height: p.height,
        url: url.clone(),
        thumbnail_url: url.clone(),
        sizes: MediaSizes {
            thumbnail: ThumbnailSize {
                width: p.thumbnail_width,
                height: p.thumbnail_height,
                mime_type,
                filesize: p.thumbnail_filesize,
                filename: format!("thumb_{}", asset.filename),
                url,
            },
        },
        created_at: now,
        updated_at: now,
    }
}

pub fn validate_assets(assets: &[AssetDescriptor]) -> Result<(), SeedError> {
    if assets.is_empty() {
        return Err(SeedError::EmptyAssetList);
    }

    let mut seen = HashSet::with_capacity(assets.len());
    for asset in assets {
        let invalid = |reason: &str| SeedError::InvalidAsset {
            filename: asset.filename.clone(),
            reason: reason.to_string(),
        };

        if asset.filename.trim().is_empty() {
            return Err(invalid("filename is empty"));
        }
        if asset.extension().is_none() {
            return Err(invalid("filename has no extension"));
        }
        if !seen.insert(asset.filename.as_str()) {
            return Err(SeedError::DuplicateAsset(asset.filename.clone()));
        }
    }
    Ok(())
}

/// Create one media record per asset, in order.
///
/// A failed `create` is logged and recorded in the report; the pass carries on
/// with the next asset. An invalid asset list or a store that fails its
/// readiness check aborts the pass with no report. Records created before an
/// abort are left in the store.
pub fn seed_media(
    store: &dyn RecordStore,
    config: &SeedConfig,
    assets: &[AssetDescriptor],
) -> Result<SeedReport, SeedError> {
    tracing::info!("Creating media entries for existing storage files...");

    if let Err(e) = prepare(store, config, assets) {
        tracing::error!("Critical error in media seeding: {}", e);
        return Err(e);
    }

    let mut report = SeedReport::default();

    for asset in assets {
        tracing::info!("Creating database entry for: {}", asset.filename);

        let payload = build_payload(asset, config, Utc::now());
        match store.create(&config.collection, &payload) {
            Ok(record) => {
                tracing::info!(
                    "Created media entry: {} -> ID: {}",
                    asset.filename,
                    record.id
                );
                tracing::info!("  File URL: {}", payload.url);
                report.push(
                    &asset.filename,
                    &payload.url,
                    SeedOutcome::Created { id: record.id },
                );
            }
            Err(e) => {
                tracing::error!("Failed to create media entry for {}: {}", asset.filename, e);
                tracing::debug!("Full error: {:?}", e);
                report.push(
                    &asset.filename,
                    &payload.url,
                    SeedOutcome::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    if report.is_complete() {
        tracing::info!(
            "All media entries created successfully! ({}/{})",
            report.success_count(),
            report.total()
        );
    } else {
        tracing::warn!(
            "Partial success: {}/{} media entries created",
            report.success_count(),
            report.total()
        );
    }

    Ok(report)
}

fn prepare(
    store: &dyn RecordStore,
    config: &SeedConfig,
    assets: &[AssetDescriptor],
) -> Result<(), SeedError> {
    validate_assets(assets)?;
    store.ensure_ready(&config.collection)?;
    Ok(())
}
