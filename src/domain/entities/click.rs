//! Click entity representing a single resolution of an enabled link.

use chrono::{DateTime, Utc};

/// One recorded click against a short link.
///
/// Clicks are append-only telemetry: never mutated, never deleted by normal
/// operation. The aggregate counter on [`super::Link`] is maintained
/// separately, so the number of stored clicks may lag the counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    /// Best-effort client IP; `"unknown"` when it could not be determined.
    pub ip: String,
    pub user_agent: Option<String>,
}

impl Click {
    pub fn new(clicked_at: DateTime<Utc>, ip: String, user_agent: Option<String>) -> Self {
        Self {
            clicked_at,
            ip,
            user_agent,
        }
    }
}
