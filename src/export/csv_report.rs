//! CSV export rendering
//!
//! Full dump of the store: every field of every record, no row limit. The
//! header row is always present, even for an empty store.

use anyhow::Result;
use csv::WriterBuilder;

use crate::models::StoredTransaction;

/// Column order of the export
pub const CSV_COLUMNS: [&str; 11] = [
    "id",
    "transaction_id",
    "amount",
    "customer_id",
    "merchant",
    "transaction_date",
    "category",
    "location",
    "fraud_risk_score",
    "risk_category",
    "processed_at",
];

/// Render all stored transactions as CSV bytes.
pub fn render_csv(transactions: &[StoredTransaction]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(vec![]);

    writer.write_record(CSV_COLUMNS)?;

    for tx in transactions {
        writer.write_record([
            tx.id.to_string(),
            tx.transaction_id.clone(),
            tx.amount.to_string(),
            tx.customer_id.clone(),
            tx.merchant.clone(),
            tx.transaction_date.format("%Y-%m-%d").to_string(),
            tx.category.clone(),
            tx.location.clone(),
            tx.fraud_risk_score.to_string(),
            tx.risk_category.as_str().to_string(),
            tx.processed_at.to_rfc3339(),
        ])?;
    }

    Ok(writer.into_inner()?)
}
