//! riskdesk library interface
//!
//! Exposes the application state and router so integration tests can drive
//! the service in-process.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod pagination;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::services::scorer::ScoringPipeline;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Batch scoring pipeline (remote model with rule fallback)
    pub pipeline: Arc<ScoringPipeline>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, pipeline: ScoringPipeline) -> Self {
        Self {
            db,
            pipeline: Arc::new(pipeline),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI route (HTML dashboard)
        .merge(api::ui_routes())
        // API routes
        .merge(api::upload_routes())
        .merge(api::transaction_routes())
        .merge(api::summary_routes())
        .merge(api::export_routes())
        .merge(api::health_routes())
        // Allow the dashboard to be served from another origin in development
        .layer(CorsLayer::permissive())
        .with_state(state)
}
