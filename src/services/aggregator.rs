//! Summary aggregation
//!
//! Pure single-pass fold of stored transactions into the dashboard summary.
//! Persistence-failure handling (the zero-valued summary on DB errors) lives
//! in the HTTP handler, not here.

use crate::models::{StoredTransaction, TransactionSummary};

/// Spend bucket used when a record has no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Build the full summary in one pass over the stored records.
///
/// All three risk buckets are always present (zero when empty);
/// `high_risk_count` is the high bucket, never a separate count.
pub fn aggregate(transactions: &[StoredTransaction]) -> TransactionSummary {
    let mut summary = TransactionSummary::default();

    for tx in transactions {
        *summary.risk_distribution.bucket_mut(tx.risk_category) += 1;

        let category = if tx.category.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            tx.category.clone()
        };
        *summary.amount_by_category.entry(category).or_insert(0.0) += tx.amount;
    }

    summary.high_risk_count = summary.risk_distribution.high;
    summary.total_transactions = transactions.len() as i64;
    summary
}
