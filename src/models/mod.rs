//! Domain types shared across the pipeline

pub mod rules;
pub mod summary;
pub mod transaction;

pub use rules::ScoringRules;
pub use summary::{RiskDistribution, TransactionSummary};
pub use transaction::{RiskCategory, ScoredTransaction, StoredTransaction, TransactionRecord};
