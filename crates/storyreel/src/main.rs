//! Storyreel server binary.
//!
//! Loads configuration from the environment (and `.env` if present), applies
//! database migrations, provisions the placeholder video, and serves the
//! HTTP API.

use clap::Parser;
use storyreel_server::ServerConfig;

#[derive(Parser)]
#[command(name = "storyreel", about = "Collaborative storytelling API server")]
struct Cli {
    /// Listen address; overrides STORYREEL_ADDR
    #[arg(long)]
    addr: Option<String>,

    /// Media root for generated videos; overrides STORYREEL_MEDIA_ROOT
    #[arg(long)]
    media_root: Option<std::path::PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let mut config = ServerConfig::from_env();
    if let Some(addr) = cli.addr {
        config.addr = addr;
    }
    if let Some(media_root) = cli.media_root {
        config.media_root = media_root;
    }

    storyreel_server::serve(config).await?;
    Ok(())
}
