//! CSV upload endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::services::normalizer;
use crate::AppState;

/// POST /api/upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub total_transactions: u64,
}

/// POST /api/upload
///
/// The request body is the raw CSV text. The batch is validated as a whole,
/// scored (remote model or rule fallback), and committed in one database
/// transaction; a validation or commit failure persists nothing.
pub async fn upload_csv(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<UploadResponse>> {
    let batch_id = Uuid::new_v4();

    let records = normalizer::normalize_csv(&body)?;
    tracing::info!(
        batch_id = %batch_id,
        count = records.len(),
        "Upload batch normalized"
    );

    let scored = state.pipeline.score_batch(records).await;

    let total = crate::db::transactions::insert_batch(&state.db, &scored)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

    tracing::info!(batch_id = %batch_id, count = total, "Upload batch committed");

    Ok(Json(UploadResponse {
        message: format!("Successfully processed {} transactions", total),
        total_transactions: total,
    }))
}

/// Build upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/api/upload", post(upload_csv))
}
