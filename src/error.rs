//! Error types for riskdesk
//!
//! Validation and persistence failures are batch-fatal and caller-visible;
//! scoring degradation and aggregation failures never are (they resolve to the
//! fallback scorer and a zero-valued summary and only show up in logs).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Upload validation failure raised at the CSV normalization boundary.
///
/// Always identifies the offending row (1-based, counting data rows) and
/// field. The whole batch is rejected: zero records are scored or persisted.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: invalid `{field}`: {message}")]
    InvalidField {
        row: usize,
        field: &'static str,
        message: String,
    },

    #[error("CSV header is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("upload contained no data rows")]
    EmptyBatch,

    /// Structurally broken CSV (ragged row, unterminated quote, invalid UTF-8)
    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Rejected upload batch (400)
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Batch commit failure (500); the batch was rolled back in full
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Validation(ref err) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            ApiError::Persistence(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
