//! PDF export rendering
//!
//! Emits a one-page "Fraud Risk Report": a title line and a Courier table of
//! the first [`PDF_ROW_LIMIT`] stored records. The document is a minimal
//! PDF 1.4 object graph written directly: uncompressed content stream and an
//! xref table of byte offsets.

use crate::models::StoredTransaction;

/// Rendering limit: the report shows the first 50 records by persisted order.
/// This caps the page, not the store; exports and queries are unaffected.
pub const PDF_ROW_LIMIT: usize = 50;

/// Render the stored transactions as PDF bytes.
pub fn render_pdf(transactions: &[StoredTransaction]) -> Vec<u8> {
    let content = content_stream(transactions);

    // Objects 1-6: catalog, page tree, page, title font, table font, content
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Courier >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
    ];

    let mut pdf: Vec<u8> = Vec::new();
    pdf.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
    }

    // xref entries are exactly 20 bytes each
    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }

    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    pdf
}

/// Build the page content stream: 16pt title, then one 9pt Courier line per
/// record, 13pt leading, starting high enough that 50 rows stay on the page.
fn content_stream(transactions: &[StoredTransaction]) -> String {
    let mut content = String::new();
    content.push_str("BT\n/F1 16 Tf\n72 740 Td\n(Fraud Risk Report) Tj\nET\n");

    content.push_str("BT\n/F2 9 Tf\n13 TL\n72 710 Td\n");
    for (index, tx) in transactions.iter().take(PDF_ROW_LIMIT).enumerate() {
        if index > 0 {
            content.push_str("T*\n");
        }
        let line = format!(
            "{} - ${:.2} - {} - score {:.2} - {}",
            tx.transaction_id,
            tx.amount,
            tx.customer_id,
            tx.fraud_risk_score,
            tx.risk_category.as_str()
        );
        content.push('(');
        content.push_str(&escape_text(&line));
        content.push_str(") Tj\n");
    }
    content.push_str("ET");

    content
}

/// Escape the characters PDF string literals reserve.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}
