//! Rule-engine scoring parameters
//!
//! The amount tiers and category cutoffs are configuration, not literals, so
//! deployments (and tests) can inject different thresholds via the
//! `[scoring.rules]` section of the config file.

use serde::{Deserialize, Serialize};

use super::RiskCategory;

/// Fallback scoring thresholds and the uniform score→category cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Amounts strictly above this score as `large_amount_score` (default: 1000.0)
    #[serde(default = "default_large_amount_threshold")]
    pub large_amount_threshold: f64,

    /// Amounts strictly above this (and not large) score as
    /// `elevated_amount_score` (default: 500.0)
    #[serde(default = "default_elevated_amount_threshold")]
    pub elevated_amount_threshold: f64,

    /// Score assigned above the large-amount threshold (default: 0.8)
    #[serde(default = "default_large_amount_score")]
    pub large_amount_score: f64,

    /// Score assigned above the elevated-amount threshold (default: 0.5)
    #[serde(default = "default_elevated_amount_score")]
    pub elevated_amount_score: f64,

    /// Score assigned to everything else (default: 0.1)
    #[serde(default = "default_baseline_score")]
    pub baseline_score: f64,

    /// Scores at or above this are high risk (default: 0.7)
    #[serde(default = "default_high_risk_cutoff")]
    pub high_risk_cutoff: f64,

    /// Scores at or above this (and below the high cutoff) are medium risk
    /// (default: 0.3)
    #[serde(default = "default_medium_risk_cutoff")]
    pub medium_risk_cutoff: f64,
}

fn default_large_amount_threshold() -> f64 {
    1000.0
}

fn default_elevated_amount_threshold() -> f64 {
    500.0
}

fn default_large_amount_score() -> f64 {
    0.8
}

fn default_elevated_amount_score() -> f64 {
    0.5
}

fn default_baseline_score() -> f64 {
    0.1
}

fn default_high_risk_cutoff() -> f64 {
    0.7
}

fn default_medium_risk_cutoff() -> f64 {
    0.3
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            large_amount_threshold: default_large_amount_threshold(),
            elevated_amount_threshold: default_elevated_amount_threshold(),
            large_amount_score: default_large_amount_score(),
            elevated_amount_score: default_elevated_amount_score(),
            baseline_score: default_baseline_score(),
            high_risk_cutoff: default_high_risk_cutoff(),
            medium_risk_cutoff: default_medium_risk_cutoff(),
        }
    }
}

impl ScoringRules {
    /// Rule-based fraud score for an amount. Pure and total: every amount maps
    /// to exactly one tier.
    pub fn score_amount(&self, amount: f64) -> f64 {
        if amount > self.large_amount_threshold {
            self.large_amount_score
        } else if amount > self.elevated_amount_threshold {
            self.elevated_amount_score
        } else {
            self.baseline_score
        }
    }

    /// Map a fraud score to its risk bucket.
    ///
    /// Applied uniformly to every score regardless of which scorer produced
    /// it; the bucket is a function of the score alone.
    pub fn categorize(&self, fraud_score: f64) -> RiskCategory {
        if fraud_score >= self.high_risk_cutoff {
            RiskCategory::High
        } else if fraud_score >= self.medium_risk_cutoff {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }
}
