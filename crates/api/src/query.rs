//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the news listing endpoint
/// (`?page=&limit=&search=`).
///
/// `page` and `limit` are normalized in `newswire_core::pagination`;
/// `search` is a case-insensitive substring match against title or content.
#[derive(Debug, Deserialize)]
pub struct NewsListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}
