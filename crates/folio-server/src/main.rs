//! folio-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds the
//! in-memory store, and serves the portfolio API over HTTP.
//!
//! # Checking a seed file
//!
//! To validate the configured seed document without starting the server:
//!
//! ```text
//! cargo run -p folio-server -- --check
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use folio_server::{ServerConfig, open_store};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Folio portfolio server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Load the configuration and seed content, report, and exit.
  #[arg(long)]
  check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let store = open_store(&server_cfg)
    .await
    .context("failed to build store")?;

  if cli.check {
    println!("configuration and seed content are valid");
    return Ok(());
  }

  if let Some(dir) = &server_cfg.static_dir {
    tracing::info!(dir = %dir.display(), "serving static files");
  }

  let app = folio_server::router(Arc::new(store), server_cfg.static_dir.as_deref());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!("failed to listen for shutdown signal: {e}");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
