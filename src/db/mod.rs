//! Database access for riskdesk

pub mod transactions;

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
///
/// Connects to the SQLite file (creating it if needed) and ensures the
/// schema exists.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Use proper SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the transactions table if it doesn't exist.
///
/// Public so tests can apply the real schema to in-memory pools. The CHECK
/// constraints keep out-of-range scores and unknown categories out of the
/// store no matter which code path tries to write them.
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            transaction_id TEXT NOT NULL,
            amount REAL NOT NULL,
            customer_id TEXT NOT NULL,
            merchant TEXT NOT NULL DEFAULT '',
            transaction_date TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT '',
            location TEXT NOT NULL DEFAULT '',
            fraud_risk_score REAL NOT NULL
                CHECK(fraud_risk_score >= 0.0 AND fraud_risk_score <= 1.0),
            risk_category TEXT NOT NULL
                CHECK(risk_category IN ('low', 'medium', 'high')),
            processed_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (transactions)");

    Ok(())
}
