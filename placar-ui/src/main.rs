//! placar-ui - Competition leaderboard service
//!
//! Fetches the published competition sheets, derives tie-aware ranked
//! standings and serves them to the presentation layer.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use placar_common::config::Config;
use placar_ui::services::SheetClient;
use placar_ui::{build_router, ingest, AppState, SharedState};

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "placar-ui", about = "Competition leaderboard service")]
struct Cli {
    /// Path to placar.toml (overrides PLACAR_CONFIG and the default path)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen port (overrides the configured value)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything that may log
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting placar-ui v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;
    let port = cli.port.unwrap_or(config.listen_port);

    let state = Arc::new(SharedState::new());
    let client = SheetClient::new()?;

    // Ingestion loop: one cycle immediately, then on the refresh interval
    tokio::spawn(ingest::run_loop(
        client,
        config.clone(),
        Arc::clone(&state),
    ));

    let app = build_router(AppState::new(Arc::clone(&state), config.challenge.clone()));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("placar-ui listening on http://127.0.0.1:{port}");
    info!("Health check: http://127.0.0.1:{port}/health");

    axum::serve(listener, app).await?;

    Ok(())
}
