//! Pagination utilities for the transaction browse API

/// Default rows per page when the caller does not specify `per_page`
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Upper bound on caller-supplied `per_page`
pub const MAX_PAGE_SIZE: i64 = 500;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: i64,
    /// Rows per page after clamping
    pub per_page: i64,
    /// Total number of pages
    pub total_pages: i64,
    /// Offset for SQL LIMIT/OFFSET query
    pub offset: i64,
}

/// Calculate pagination metadata from total results and the requested window
///
/// Ensures page is within valid bounds [1, total_pages] and per_page within
/// [1, MAX_PAGE_SIZE].
///
/// # Examples
/// ```
/// use riskdesk::pagination::calculate_pagination;
///
/// // 120 total results at 50/page = 3 pages (50 + 50 + 20)
/// let p = calculate_pagination(120, 2, 50);
/// assert_eq!(p.page, 2);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!(p.offset, 50);
///
/// // Requesting out-of-bounds page gets clamped
/// let p = calculate_pagination(120, 99, 50);
/// assert_eq!(p.page, 3);
/// assert_eq!(p.offset, 100);
/// ```
pub fn calculate_pagination(total_results: i64, requested_page: i64, requested_per_page: i64) -> Pagination {
    let per_page = requested_per_page.clamp(1, MAX_PAGE_SIZE);
    let total_pages = (total_results + per_page - 1) / per_page;
    let page = requested_page.max(1).min(total_pages.max(1));
    let offset = (page - 1) * per_page;

    Pagination {
        page,
        per_page,
        total_pages,
        offset,
    }
}
