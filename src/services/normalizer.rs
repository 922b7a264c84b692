//! CSV upload normalization
//!
//! Turns the raw CSV text of an upload into typed `TransactionRecord`s, in
//! input order. Validation is all-or-nothing: any missing or malformed
//! required field rejects the whole batch with the offending row and field,
//! and zero records continue down the pipeline.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::ValidationError;
use crate::models::TransactionRecord;

/// Columns that must be present in the header and non-empty in every row
pub const REQUIRED_COLUMNS: [&str; 4] = ["transaction_id", "amount", "customer_id", "date"];

/// Transient serde target for one CSV row. Everything is optional here so
/// that presence checks (and their row-numbered errors) stay in one place.
#[derive(Debug, Deserialize)]
struct CsvRow {
    transaction_id: Option<String>,
    amount: Option<String>,
    customer_id: Option<String>,
    merchant: Option<String>,
    date: Option<String>,
    category: Option<String>,
    location: Option<String>,
}

/// Parse and validate an uploaded CSV body.
///
/// Expects a header row naming at least the required columns; `merchant`,
/// `category` and `location` may be absent or empty and default to `""`.
/// Values are whitespace-trimmed before validation. Row numbers in errors are
/// 1-based and count data rows, not the header.
pub fn normalize_csv(text: &str) -> Result<Vec<TransactionRecord>, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ValidationError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row_number = index + 1;
        let row = row?;
        records.push(normalize_row(row_number, row)?);
    }

    if records.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    Ok(records)
}

fn normalize_row(row_number: usize, row: CsvRow) -> Result<TransactionRecord, ValidationError> {
    let transaction_id = require(row_number, "transaction_id", row.transaction_id)?;
    let amount_text = require(row_number, "amount", row.amount)?;
    let customer_id = require(row_number, "customer_id", row.customer_id)?;
    let date_text = require(row_number, "date", row.date)?;

    let amount: f64 = amount_text
        .parse()
        .map_err(|_| ValidationError::InvalidField {
            row: row_number,
            field: "amount",
            message: format!("`{}` is not a number", amount_text),
        })?;
    // str::parse accepts "NaN" and "inf"; neither is a usable amount
    if !amount.is_finite() {
        return Err(ValidationError::InvalidField {
            row: row_number,
            field: "amount",
            message: format!("`{}` is not a finite number", amount_text),
        });
    }

    let date = chrono::NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidField {
            row: row_number,
            field: "date",
            message: format!("unparseable date `{}` (expected YYYY-MM-DD)", date_text),
        }
    })?;

    Ok(TransactionRecord {
        transaction_id,
        amount,
        customer_id,
        merchant: row.merchant.unwrap_or_default(),
        date,
        category: row.category.unwrap_or_default(),
        location: row.location.unwrap_or_default(),
    })
}

fn require(
    row: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { row, field }),
    }
}
