//! Response envelope types for API handlers.

use serde::Serialize;

/// Pagination details returned alongside a page of results.
#[derive(Debug, Serialize)]
pub struct PageMetadata {
    pub page: i64,
    pub per_page: i64,
    /// Row count at the time of the count query, which runs separately
    /// from the page query.
    pub total: i64,
}

/// `{ "metadata": ..., "data": [...] }` envelope for paginated lists.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub metadata: PageMetadata,
    pub data: Vec<T>,
}

/// `{ "message": ... }` body used for every error response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
