//! Data Transfer Objects
//!
//! Response and query types for the API endpoints.

use serde::{Deserialize, Serialize};

/// Paginated collection, `{count, next, previous, results}`
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total records in the collection
    pub count: usize,
    /// Absolute URL of the next page
    pub next: Option<String>,
    /// Absolute URL of the previous page
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// `?page=N` (1-based). Kept as text so a bad value becomes a 404, not a 400.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy or empty
    pub status: String,
    /// Total records served across all collections
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
