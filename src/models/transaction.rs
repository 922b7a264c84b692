//! Transaction record types for the scoring pipeline
//!
//! One structured record type flows from the normalization boundary onwards;
//! every stage after the normalizer can rely on required fields being present.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Coarse risk bucket derived from a fraud score.
///
/// The bucket is a property of the score alone; the same mapping applies
/// whether the score came from the remote model or the local rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Database/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
        }
    }

    /// Parse the database/wire representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(RiskCategory::Low),
            "medium" => Some(RiskCategory::Medium),
            "high" => Some(RiskCategory::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized transaction candidate, validated at the CSV boundary.
///
/// `transaction_id` is the uploader's external identifier and is not enforced
/// unique; re-uploading a file creates duplicate rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub amount: f64,
    pub customer_id: String,
    /// Optional in the input; empty string when absent
    pub merchant: String,
    /// Calendar date of the transaction (`YYYY-MM-DD` in the input)
    pub date: NaiveDate,
    /// Optional spend category; empty string when absent
    pub category: String,
    /// Optional; empty string when absent
    pub location: String,
}

/// A normalized record annotated with its fraud score and risk bucket.
///
/// Only fully scored records reach the persister; there is no state where a
/// record has one of the two fields but not the other.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTransaction {
    #[serde(flatten)]
    pub record: TransactionRecord,
    /// Estimated fraud likelihood in [0.0, 1.0]
    pub fraud_score: f64,
    pub risk_category: RiskCategory,
}

/// A committed transaction row, owned by the database after batch commit.
///
/// Field names mirror the persisted columns and the JSON shape served by the
/// listing and export endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StoredTransaction {
    /// System-assigned row id
    pub id: i64,
    pub transaction_id: String,
    pub amount: f64,
    pub customer_id: String,
    pub merchant: String,
    pub transaction_date: NaiveDate,
    pub category: String,
    pub location: String,
    pub fraud_risk_score: f64,
    pub risk_category: RiskCategory,
    pub processed_at: DateTime<Utc>,
}
