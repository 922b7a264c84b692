//! riskdesk - Transaction fraud scoring and reporting service
//!
//! Ingests CSV batches of financial transactions, scores each record for
//! fraud risk (remote model when configured, rule engine otherwise), persists
//! the scored records in SQLite, and serves summaries, exports, and a small
//! dashboard over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;

use riskdesk::config::{AppConfig, Args};
use riskdesk::services::scorer::ScoringPipeline;
use riskdesk::services::scoring_client::RemoteScoringClient;
use riskdesk::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting riskdesk v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = AppConfig::resolve(&args);

    let pool = riskdesk::db::init_database_pool(&config.database)
        .await
        .context("Failed to initialize database")?;
    info!("Database ready: {}", config.database.display());

    match &config.scoring_url {
        Some(url) => info!("Scoring service: {}", url),
        None => info!("Scoring service not configured; batches will be rule-scored"),
    }

    let client = RemoteScoringClient::new(config.scoring_url.clone(), config.scoring_timeout)
        .map_err(|e| anyhow::anyhow!("Failed to build scoring client: {}", e))?;
    let pipeline = ScoringPipeline::new(client, config.rules);

    let state = AppState::new(pool, pipeline);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .context("Failed to bind to port")?;
    info!("riskdesk listening on http://0.0.0.0:{}", config.port);
    info!("Dashboard: http://127.0.0.1:{}/", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
