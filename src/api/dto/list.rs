//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response listing every registered link.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub urls: Vec<LinkInfo>,
}

/// Summary of one registered link.
#[derive(Debug, Serialize)]
pub struct LinkInfo {
    pub shortcode: String,
    pub destination: String,
    pub short_url: String,
    pub enabled: bool,
    pub is_zip: bool,
    pub clicks: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}
