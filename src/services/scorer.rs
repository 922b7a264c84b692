//! Scoring orchestration
//!
//! Decides, per batch, whether scores come from the remote model or the local
//! rules, and applies the category mapping uniformly to whichever score was
//! produced. A batch is never mixed: either every record carries a remote
//! score or every record was rule-scored.

use tracing::{info, warn};

use crate::models::{ScoredTransaction, ScoringRules, TransactionRecord};
use crate::services::scoring_client::RemoteScoringClient;

/// Result of attempting remote delegation for one batch
pub enum ScoringOutcome {
    /// The scoring service accepted the batch; scores are in request order
    Delegated(Vec<f64>),
    /// Delegation declined or failed; the whole batch is rule-scored locally
    FallbackNeeded(String),
}

/// Batch scoring pipeline: remote model when available, rule fallback
/// otherwise. Scoring never fails; degradation only shows up in logs.
pub struct ScoringPipeline {
    client: RemoteScoringClient,
    rules: ScoringRules,
}

impl ScoringPipeline {
    pub fn new(client: RemoteScoringClient, rules: ScoringRules) -> Self {
        Self { client, rules }
    }

    /// Score a normalized batch, preserving order and count.
    pub async fn score_batch(&self, records: Vec<TransactionRecord>) -> Vec<ScoredTransaction> {
        let outcome = self.delegate(&records).await;
        self.apply_outcome(records, outcome)
    }

    async fn delegate(&self, records: &[TransactionRecord]) -> ScoringOutcome {
        match self.client.score_batch(records).await {
            Ok(scores) => ScoringOutcome::Delegated(scores),
            Err(e) => ScoringOutcome::FallbackNeeded(e.to_string()),
        }
    }

    /// Turn a delegation outcome into scored records. Categories are always
    /// derived here from the score, regardless of where the score came from.
    fn apply_outcome(
        &self,
        records: Vec<TransactionRecord>,
        outcome: ScoringOutcome,
    ) -> Vec<ScoredTransaction> {
        match outcome {
            ScoringOutcome::Delegated(scores) => {
                info!(count = records.len(), "Batch scored by scoring service");
                records
                    .into_iter()
                    .zip(scores)
                    .map(|(record, fraud_score)| ScoredTransaction {
                        record,
                        fraud_score,
                        risk_category: self.rules.categorize(fraud_score),
                    })
                    .collect()
            }
            ScoringOutcome::FallbackNeeded(reason) => {
                warn!(
                    reason = %reason,
                    count = records.len(),
                    "Scoring service unavailable, using rule-based fallback"
                );
                records.into_iter().map(|r| self.score_locally(r)).collect()
            }
        }
    }

    fn score_locally(&self, record: TransactionRecord) -> ScoredTransaction {
        let fraud_score = self.rules.score_amount(record.amount);
        ScoredTransaction {
            risk_category: self.rules.categorize(fraud_score),
            fraud_score,
            record,
        }
    }
}
