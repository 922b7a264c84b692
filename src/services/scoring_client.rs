//! Remote scoring service client
//!
//! POSTs a normalized batch to the configured scoring endpoint and hands back
//! the model's scores. Every failure mode here is recoverable: the caller
//! falls back to local rule scoring, so errors carry a reason string for the
//! degradation log rather than propagating to the upload response.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::TransactionRecord;

const USER_AGENT: &str = concat!("riskdesk/", env!("CARGO_PKG_VERSION"));

/// Remote scoring client errors
#[derive(Debug, Error)]
pub enum ScoringClientError {
    #[error("scoring service not configured")]
    NotConfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("scoring service returned status {0}: {1}")]
    Status(u16, String),

    #[error("unparseable scoring response: {0}")]
    Parse(String),

    #[error("scoring response has {got} entries for {want} submitted")]
    CountMismatch { want: usize, got: usize },

    #[error("scoring response out of order at position {position}: got `{got}`, expected `{want}`")]
    OrderMismatch {
        position: usize,
        want: String,
        got: String,
    },

    #[error("score {score} for `{transaction_id}` outside [0, 1]")]
    ScoreOutOfRange {
        transaction_id: String,
        score: f64,
    },
}

/// Scoring service response envelope
#[derive(Debug, Deserialize)]
struct ScoringResponse {
    scored_transactions: Vec<ScoredEntry>,
}

/// One scored record from the service. Any `risk_category` the service sends
/// is ignored; categories are derived locally from the score.
#[derive(Debug, Deserialize)]
struct ScoredEntry {
    transaction_id: String,
    fraud_score: f64,
}

/// Remote scoring API client
pub struct RemoteScoringClient {
    http_client: reqwest::Client,
    url: Option<String>,
}

impl RemoteScoringClient {
    /// Build a client with a bounded request timeout. `url` is `None` when no
    /// scoring service is configured; `score_batch` then always declines.
    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self, ScoringClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScoringClientError::Network(e.to_string()))?;

        Ok(Self { http_client, url })
    }

    /// Submit the full batch as a JSON array and return the model's scores in
    /// request order.
    ///
    /// Succeeds only when the response is an HTTP success whose body parses as
    /// `{"scored_transactions": [...]}` with exactly one in-order entry per
    /// submitted record, every score within [0, 1].
    pub async fn score_batch(
        &self,
        records: &[TransactionRecord],
    ) -> Result<Vec<f64>, ScoringClientError> {
        let url = self.url.as_deref().ok_or(ScoringClientError::NotConfigured)?;

        tracing::debug!(count = records.len(), "Submitting batch to scoring service");

        let response = self
            .http_client
            .post(url)
            .json(records)
            .send()
            .await
            .map_err(|e| ScoringClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScoringClientError::Status(status.as_u16(), error_text));
        }

        let parsed: ScoringResponse = response
            .json()
            .await
            .map_err(|e| ScoringClientError::Parse(e.to_string()))?;

        let scores = extract_scores(records, parsed)?;

        tracing::info!(count = scores.len(), "Scoring service scored batch");
        Ok(scores)
    }
}

/// Validate a parsed response against the submitted batch and pull out the
/// scores.
fn extract_scores(
    records: &[TransactionRecord],
    response: ScoringResponse,
) -> Result<Vec<f64>, ScoringClientError> {
    if response.scored_transactions.len() != records.len() {
        return Err(ScoringClientError::CountMismatch {
            want: records.len(),
            got: response.scored_transactions.len(),
        });
    }

    let mut scores = Vec::with_capacity(records.len());
    for (position, (entry, record)) in response
        .scored_transactions
        .iter()
        .zip(records)
        .enumerate()
    {
        if entry.transaction_id != record.transaction_id {
            return Err(ScoringClientError::OrderMismatch {
                position,
                want: record.transaction_id.clone(),
                got: entry.transaction_id.clone(),
            });
        }
        if !(0.0..=1.0).contains(&entry.fraud_score) {
            return Err(ScoringClientError::ScoreOutOfRange {
                transaction_id: entry.transaction_id.clone(),
                score: entry.fraud_score,
            });
        }
        scores.push(entry.fraud_score);
    }

    Ok(scores)
}
