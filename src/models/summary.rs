//! On-demand aggregate statistics over the persisted record set

use std::collections::BTreeMap;

use serde::Serialize;

use super::RiskCategory;

/// Counts per risk bucket.
///
/// A struct rather than a map so all three buckets appear in every summary,
/// including the ones with zero occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

impl RiskDistribution {
    /// Mutable counter for one bucket
    pub fn bucket_mut(&mut self, category: RiskCategory) -> &mut i64 {
        match category {
            RiskCategory::High => &mut self.high,
            RiskCategory::Medium => &mut self.medium,
            RiskCategory::Low => &mut self.low,
        }
    }

    pub fn total(&self) -> i64 {
        self.high + self.medium + self.low
    }
}

/// Summary recomputed fresh from the full persisted set on every request;
/// never cached, never stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionSummary {
    pub risk_distribution: RiskDistribution,
    /// Summed amounts keyed by spend category (`"Uncategorized"` for records
    /// without one)
    pub amount_by_category: BTreeMap<String, f64>,
    /// Always equal to `risk_distribution.high`
    pub high_risk_count: i64,
    pub total_transactions: i64,
}
