//! Transaction browse and bulk-clear endpoints

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::models::StoredTransaction;
use crate::pagination::{calculate_pagination, DEFAULT_PAGE_SIZE};
use crate::AppState;

/// GET /api/transactions query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// GET /api/transactions response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub transactions: Vec<StoredTransaction>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

/// POST /api/clear response
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub cleared_count: i64,
}

/// GET /api/transactions
///
/// Paginated listing in persisted order. Out-of-range pages clamp rather
/// than 404.
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListResponse>> {
    let total = crate::db::transactions::count(&state.db).await?;
    let pagination = calculate_pagination(total, query.page, query.per_page);

    let transactions =
        crate::db::transactions::list_page(&state.db, pagination.per_page, pagination.offset)
            .await?;

    Ok(Json(ListResponse {
        transactions,
        total,
        pages: pagination.total_pages,
        current_page: pagination.page,
    }))
}

/// GET /api/transactions/{id}
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<StoredTransaction>> {
    let transaction = crate::db::transactions::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Transaction not found: {}", id)))?;

    Ok(Json(transaction))
}

/// POST /api/clear
///
/// Deletes every stored transaction and reports how many there were.
pub async fn clear_transactions(State(state): State<AppState>) -> ApiResult<Json<ClearResponse>> {
    let cleared_count = crate::db::transactions::clear_all(&state.db).await?;

    tracing::info!(count = cleared_count, "Cleared transaction store");

    Ok(Json(ClearResponse {
        message: format!("Successfully cleared {} transactions", cleared_count),
        cleared_count,
    }))
}

/// Build transaction browse routes
pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route("/api/transactions", get(list_transactions))
        .route("/api/transactions/:id", get(get_transaction))
        .route("/api/clear", post(clear_transactions))
}
