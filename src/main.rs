//! Shortly server binary.
//!
//! # Usage
//!
//! ```bash
//! # Start with variables from ./.env (if present)
//! cargo run
//!
//! # Use a different env file
//! cargo run -- --env-file config/local.env
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use shortly::config::{self, Config};
use shortly::server;

/// In-memory URL shortener service.
#[derive(Parser)]
#[command(name = "shortly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Env file loaded before reading configuration; a missing file is ignored
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_loaded = dotenvy::from_path(&cli.env_file).is_ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;

    if env_loaded {
        tracing::info!("Loaded environment from {}", cli.env_file.display());
    }
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber using the configured level and format.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
    }
}
