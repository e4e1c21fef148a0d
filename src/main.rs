//! Service entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use user_service::{config, logging, server};

/// User API guarded by a shared secret.
#[derive(Parser)]
#[command(name = "user-service")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dotenv file to load instead of `./.env`
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Validate configuration, print a summary and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let config = config::load_from_env().context("Invalid configuration")?;
    logging::init(&config)?;
    config.print_summary();

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    server::run(config).await
}
