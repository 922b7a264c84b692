//! Report rendering
//!
//! Turns the stored transaction set into downloadable documents. Both
//! renderers are pure byte producers; content types and attachment headers
//! are the API layer's concern.

pub mod csv_report;
pub mod pdf_report;
