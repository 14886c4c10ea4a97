//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard pagination envelope for list and search endpoints.
///
/// `page` and `limit` echo the (clamped) values the query ran with so
/// clients can page without re-deriving them.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    /// Total matching rows across all pages.
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
