use crate::models::{AssetDescriptor, SeedOutcome, SeedReport};
use crate::services::manifest::load_manifest;
use crate::services::seed::{build_payload, builtin_assets, seed_media, validate_assets};
use crate::services::store::RecordStore;
use crate::{Config, Database};
use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub async fn run(
    config_path: &Path,
    manifest: Option<PathBuf>,
    remote: bool,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;

    let assets = match manifest {
        Some(path) => load_manifest(&path).map_err(|e| {
            tracing::error!("Critical error in media seeding: {}", e);
            e
        })?,
        None => builtin_assets(),
    };

    if dry_run {
        validate_assets(&assets)?;
        print_plan(&config, &assets);
        return Ok(());
    }

    let report = tokio::task::spawn_blocking(move || -> Result<SeedReport> {
        let store = open_store(&config, remote)?;
        let report = seed_media(&*store, &config.seed_config(), &assets)?;
        Ok(report)
    })
    .await??;

    print_report(&report);
    Ok(())
}

fn open_store(config: &Config, remote: bool) -> Result<Box<dyn RecordStore>> {
    if remote {
        return open_remote_store(config);
    }
    let db = Database::open(&config.database.path)?;
    Ok(Box::new(db))
}

#[cfg(feature = "remote")]
fn open_remote_store(config: &Config) -> Result<Box<dyn RecordStore>> {
    let remote = config
        .remote
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("--remote needs a [remote] section in the config"))?;
    Ok(Box::new(crate::services::remote::RemoteStore::new(remote)?))
}

#[cfg(not(feature = "remote"))]
fn open_remote_store(_config: &Config) -> Result<Box<dyn RecordStore>> {
    anyhow::bail!("this build was compiled without the `remote` feature")
}

fn print_plan(config: &Config, assets: &[AssetDescriptor]) {
    let seed_config = config.seed_config();
    let now = Utc::now();

    println!(
        "\n  Dry run: {} record(s) would be created in '{}'\n",
        assets.len(),
        seed_config.collection
    );
    println!("  {:<32} {:<12} {}", "FILENAME", "MIME", "URL");
    println!("  {}", "-".repeat(90));
    for asset in assets {
        let payload = build_payload(asset, &seed_config, now);
        println!(
            "  {:<32} {:<12} {}",
            payload.filename, payload.mime_type, payload.url
        );
    }
    println!();
}

fn print_report(report: &SeedReport) {
    println!("\n  {:<32} {:<10} {}", "FILENAME", "STATUS", "DETAIL");
    println!("  {}", "-".repeat(90));
    for item in &report.items {
        let (status, detail) = match &item.outcome {
            SeedOutcome::Created { id } => ("\x1b[32mcreated\x1b[0m", id.as_str()),
            SeedOutcome::Failed { reason } => ("\x1b[31mfailed\x1b[0m ", reason.as_str()),
        };
        println!("  {:<32} {:<10} {}", item.filename, status, detail);
    }
    println!(
        "\n  {}/{} media entries created.\n",
        report.success_count(),
        report.total()
    );
}
