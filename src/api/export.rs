//! Export download endpoints

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::error::ApiResult;
use crate::export::{csv_report, pdf_report};
use crate::AppState;

/// GET /api/export/csv
///
/// Full dump of the store as a CSV attachment.
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let transactions = crate::db::transactions::list_all(&state.db).await?;
    let bytes = csv_report::render_csv(&transactions)?;

    tracing::info!(count = transactions.len(), "Rendered CSV export");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"fraud_report.csv\"",
            ),
        ],
        bytes,
    ))
}

/// GET /api/export/pdf
///
/// One-page PDF report of the first 50 records.
pub async fn export_pdf(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let transactions = crate::db::transactions::list_all(&state.db).await?;
    let bytes = pdf_report::render_pdf(&transactions);

    tracing::info!(count = transactions.len(), "Rendered PDF export");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"fraud_report.pdf\"",
            ),
        ],
        bytes,
    ))
}

/// Build export routes
pub fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/api/export/csv", get(export_csv))
        .route("/api/export/pdf", get(export_pdf))
}
