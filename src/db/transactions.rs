//! Transaction row persistence and queries
//!
//! Batch inserts run inside a single SQLite transaction: either every scored
//! record in the upload commits or none do.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::{RiskCategory, ScoredTransaction, StoredTransaction};

/// Insert a scored batch atomically. Returns the committed row count.
///
/// Any row failure aborts the whole transaction (rollback on drop), so a
/// partial batch is never observable. Re-uploading the same file inserts
/// duplicate rows; the store does not deduplicate.
pub async fn insert_batch(pool: &SqlitePool, scored: &[ScoredTransaction]) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let processed_at = Utc::now().to_rfc3339();

    for item in scored {
        sqlx::query(
            r#"
            INSERT INTO transactions
                (transaction_id, amount, customer_id, merchant, transaction_date,
                 category, location, fraud_risk_score, risk_category, processed_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.record.transaction_id)
        .bind(item.record.amount)
        .bind(&item.record.customer_id)
        .bind(&item.record.merchant)
        .bind(item.record.date.format("%Y-%m-%d").to_string())
        .bind(&item.record.category)
        .bind(&item.record.location)
        .bind(item.fraud_score)
        .bind(item.risk_category.as_str())
        .bind(&processed_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(scored.len() as u64)
}

/// Fetch all stored transactions in persisted (id) order.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<StoredTransaction>> {
    let rows = sqlx::query("SELECT * FROM transactions ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(map_row).collect()
}

/// Fetch one page of stored transactions in persisted (id) order.
pub async fn list_page(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<StoredTransaction>> {
    let rows = sqlx::query("SELECT * FROM transactions ORDER BY id LIMIT ? OFFSET ?")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    rows.iter().map(map_row).collect()
}

/// Fetch a single transaction by system id.
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<StoredTransaction>> {
    let row = sqlx::query("SELECT * FROM transactions WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(map_row).transpose()
}

/// Count stored transactions.
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Delete every stored transaction, returning the pre-deletion count.
pub async fn clear_all(pool: &SqlitePool) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
        .fetch_one(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM transactions")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(count)
}

fn map_row(row: &SqliteRow) -> Result<StoredTransaction> {
    let date_text: String = row.try_get("transaction_date")?;
    let transaction_date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")?;

    let processed_text: String = row.try_get("processed_at")?;
    let processed_at = DateTime::parse_from_rfc3339(&processed_text)?.with_timezone(&Utc);

    // Unknown category text maps to low rather than failing the read
    let category_text: String = row.try_get("risk_category")?;
    let risk_category = RiskCategory::parse(&category_text).unwrap_or(RiskCategory::Low);

    Ok(StoredTransaction {
        id: row.try_get("id")?,
        transaction_id: row.try_get("transaction_id")?,
        amount: row.try_get("amount")?,
        customer_id: row.try_get("customer_id")?,
        merchant: row.try_get("merchant")?,
        transaction_date,
        category: row.try_get("category")?,
        location: row.try_get("location")?,
        fraud_risk_score: row.try_get("fraud_risk_score")?,
        risk_category,
        processed_at,
    })
}
