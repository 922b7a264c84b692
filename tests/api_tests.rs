//! Integration tests for riskdesk API endpoints
//!
//! Tests cover:
//! - CSV upload: happy path, whole-batch validation failures
//! - Summary aggregation over committed records
//! - Paginated browsing and single-record lookup
//! - Bulk clear
//! - CSV and PDF export downloads
//! - Health endpoint and embedded dashboard
//!
//! No scoring service is configured here, so every batch is rule-scored;
//! delegation behavior is covered in scoring_tests.rs.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot` method

use riskdesk::models::ScoringRules;
use riskdesk::services::scorer::ScoringPipeline;
use riskdesk::services::scoring_client::RemoteScoringClient;
use riskdesk::{build_router, AppState};

const CSV_HEADER: &str = "transaction_id,amount,customer_id,merchant,date,category,location";

/// Test helper: In-memory database with the real schema
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .expect("Should create in-memory database");
    riskdesk::db::init_tables(&pool)
        .await
        .expect("Should create schema");
    pool
}

/// Test helper: App with no scoring service configured (rule-based scoring)
async fn setup_app() -> axum::Router {
    let db = setup_test_db().await;
    let client = RemoteScoringClient::new(None, Duration::from_secs(1)).unwrap();
    let pipeline = ScoringPipeline::new(client, ScoringRules::default());
    let state = AppState::new(db, pipeline);
    build_router(state)
}

/// Test helper: Create request with empty body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create CSV upload request
fn upload_request(csv: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header("content-type", "text/csv")
        .body(Body::from(csv.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Test helper: Extract raw bytes from response
async fn extract_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

/// The worked example batch: one high-risk amount, two low
fn example_csv() -> String {
    format!(
        "{CSV_HEADER}\n\
         TX001,150.50,CUST01,Amazon,2024-01-15,Retail,New York\n\
         TX002,1200.00,CUST02,Delta,2024-01-16,Travel,Boston\n\
         TX003,25.75,CUST01,Starbucks,2024-01-17,Retail,New York\n"
    )
}

// =============================================================================
// Health and Dashboard
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "riskdesk");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_number());
}

#[tokio::test]
async fn test_dashboard_served() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = extract_bytes(response.into_body()).await;
    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Riskdesk"));
    assert!(html.contains("/api/upload"));
}

// =============================================================================
// Upload
// =============================================================================

#[tokio::test]
async fn test_upload_happy_path() {
    let app = setup_app().await;

    let response = app.oneshot(upload_request(&example_csv())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Successfully processed 3 transactions");
    assert_eq!(body["total_transactions"], 3);
}

#[tokio::test]
async fn test_upload_then_summary_round_trip() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(test_request("GET", "/api/transactions/summary"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_transactions"], 3);
    assert_eq!(body["risk_distribution"]["high"], 1);
    assert_eq!(body["risk_distribution"]["medium"], 0);
    assert_eq!(body["risk_distribution"]["low"], 2);
    assert_eq!(body["high_risk_count"], 1);

    let retail = body["amount_by_category"]["Retail"].as_f64().unwrap();
    assert!((retail - 176.25).abs() < 1e-9);
    let travel = body["amount_by_category"]["Travel"].as_f64().unwrap();
    assert!((travel - 1200.00).abs() < 1e-9);
}

#[tokio::test]
async fn test_upload_malformed_date_rejects_whole_batch() {
    let app = setup_app().await;

    let csv = format!(
        "{CSV_HEADER}\n\
         TX001,150.50,CUST01,Amazon,2024-01-15,Retail,NYC\n\
         TX002,60.00,CUST02,Delta,2024-13-40,Travel,Boston\n\
         TX003,25.75,CUST01,Starbucks,2024-01-17,Retail,NYC\n"
    );
    let response = app.clone().oneshot(upload_request(&csv)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("row 2"));
    assert!(message.contains("date"));

    // Zero records persisted, including the valid rows
    let response = app
        .oneshot(test_request("GET", "/api/transactions/summary"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_transactions"], 0);
}

#[tokio::test]
async fn test_upload_missing_required_value() {
    let app = setup_app().await;

    let csv = format!("{CSV_HEADER}\nTX001,150.50,,Amazon,2024-01-15,Retail,NYC\n");
    let response = app.oneshot(upload_request(&csv)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("row 1"));
    assert!(message.contains("customer_id"));
}

#[tokio::test]
async fn test_upload_missing_column_rejected() {
    let app = setup_app().await;

    let csv = "transaction_id,amount,customer_id,merchant,category,location\n\
               TX001,150.50,CUST01,Amazon,Retail,NYC\n";
    let response = app.oneshot(upload_request(csv)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"]["message"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn test_upload_empty_body_rejected() {
    let app = setup_app().await;

    let response = app.oneshot(upload_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_upload_accumulates() {
    let app = setup_app().await;

    app.clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();
    app.clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();

    let response = app
        .oneshot(test_request("GET", "/api/transactions/summary"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_transactions"], 6);
    assert_eq!(body["risk_distribution"]["high"], 2);
}

// =============================================================================
// Browsing
// =============================================================================

#[tokio::test]
async fn test_transactions_listing_pagination() {
    let app = setup_app().await;

    let rows: String = (1..=5)
        .map(|n| format!("TX{n:03},{}.00,CUST01,Acme,2024-01-15,Retail,NYC\n", n * 100))
        .collect();
    app.clone()
        .oneshot(upload_request(&format!("{CSV_HEADER}\n{rows}")))
        .await
        .unwrap();

    let response = app
        .oneshot(test_request("GET", "/api/transactions?page=2&per_page=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 5);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["current_page"], 2);

    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["transaction_id"], "TX003");
    assert_eq!(transactions[1]["transaction_id"], "TX004");
}

#[tokio::test]
async fn test_transactions_listing_clamps_page() {
    let app = setup_app().await;

    app.clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();

    let response = app
        .oneshot(test_request("GET", "/api/transactions?page=9999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    // Clamped to the last page, which holds all three records
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["transactions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let app = setup_app().await;

    app.clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(test_request("GET", "/api/transactions/2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["transaction_id"], "TX002");
    assert_eq!(body["amount"], 1200.00);
    assert_eq!(body["risk_category"], "high");
    let score = body["fraud_risk_score"].as_f64().unwrap();
    assert!((score - 0.8).abs() < 1e-9);
    assert_eq!(body["transaction_date"], "2024-01-16");
}

#[tokio::test]
async fn test_get_transaction_not_found() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/api/transactions/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Summary edge cases
// =============================================================================

#[tokio::test]
async fn test_summary_empty_store_has_all_buckets() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/api/transactions/summary"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_transactions"], 0);
    assert_eq!(body["high_risk_count"], 0);
    assert_eq!(body["risk_distribution"]["high"], 0);
    assert_eq!(body["risk_distribution"]["medium"], 0);
    assert_eq!(body["risk_distribution"]["low"], 0);
    assert!(body["amount_by_category"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_uncategorized_bucket() {
    let app = setup_app().await;

    let csv = format!(
        "{CSV_HEADER}\n\
         TX001,100.00,CUST01,Acme,2024-01-15,,NYC\n\
         TX002,50.00,CUST01,Acme,2024-01-15,Retail,NYC\n"
    );
    app.clone().oneshot(upload_request(&csv)).await.unwrap();

    let response = app
        .oneshot(test_request("GET", "/api/transactions/summary"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;

    let uncategorized = body["amount_by_category"]["Uncategorized"].as_f64().unwrap();
    assert!((uncategorized - 100.00).abs() < 1e-9);
}

// =============================================================================
// Clear
// =============================================================================

#[tokio::test]
async fn test_clear_reports_count_and_empties_store() {
    let app = setup_app().await;

    app.clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(test_request("POST", "/api/clear"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Successfully cleared 3 transactions");
    assert_eq!(body["cleared_count"], 3);

    let response = app
        .clone()
        .oneshot(test_request("GET", "/api/transactions/summary"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_transactions"], 0);

    // Clearing an empty store reports zero
    let response = app
        .oneshot(test_request("POST", "/api/clear"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["cleared_count"], 0);
}

// =============================================================================
// Exports
// =============================================================================

#[tokio::test]
async fn test_export_csv_download() {
    let app = setup_app().await;

    app.clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();

    let response = app
        .oneshot(test_request("GET", "/api/export/csv"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/csv");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"fraud_report.csv\""
    );

    let text = String::from_utf8(extract_bytes(response.into_body()).await).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().next().unwrap().starts_with("id,transaction_id,amount"));
    assert!(text.contains("TX001"));
    assert!(text.contains("TX003"));
    assert!(text.contains(",high,"));
}

#[tokio::test]
async fn test_export_pdf_download() {
    let app = setup_app().await;

    app.clone()
        .oneshot(upload_request(&example_csv()))
        .await
        .unwrap();

    let response = app
        .oneshot(test_request("GET", "/api/export/pdf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/pdf");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"fraud_report.pdf\""
    );

    let bytes = extract_bytes(response.into_body()).await;
    assert!(bytes.starts_with(b"%PDF-1.4"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Fraud Risk Report"));
    assert!(text.contains("TX002"));
}
