pub mod init;
pub mod media;
pub mod migrate;
pub mod seed;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "media-seed")]
#[command(version)]
#[command(about = "Seed media records for files already in object storage", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "media-seed.toml", env = "MEDIA_SEED_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Create or update the SQLite schema
    Migrate,
    /// Create one media record per asset
    Seed {
        /// TOML file of [[asset]] entries to use instead of the built-in list
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Send records to the [remote] CMS instead of the local database
        #[arg(long)]
        remote: bool,
        /// Print what would be created without touching any store
        #[arg(long)]
        dry_run: bool,
    },
    /// Inspect seeded media records
    Media {
        #[command(subcommand)]
        command: MediaCommand,
    },
}

#[derive(Subcommand)]
pub enum MediaCommand {
    List {
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
}
