//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to register a new short link.
///
/// Both fields are declared optional so a missing field produces a clear
/// 400 from the handler instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    /// Desired short code (lowercase letters, digits, hyphens).
    pub shortcode: Option<String>,

    /// Destination URL, stored verbatim. Must start with http:// or https://.
    pub destination: Option<String>,
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub shortcode: String,
    pub destination: String,
    pub short_url: String,
    /// Created disabled; must be enabled before it resolves.
    pub enabled: bool,
    pub created: DateTime<Utc>,
}
