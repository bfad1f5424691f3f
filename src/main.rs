use clap::Parser;
use media_seed::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            media_seed::cli::init::run(path).await?;
        }
        Some(Commands::Migrate) => {
            media_seed::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Seed {
            manifest,
            remote,
            dry_run,
        }) => {
            media_seed::cli::seed::run(&cli.config, manifest, remote, dry_run).await?;
        }
        Some(Commands::Media { command }) => {
            media_seed::cli::media::run(&cli.config, command).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
