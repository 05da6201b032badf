//! Click event model for asynchronous click persistence.

use chrono::{DateTime, Utc};

/// An in-memory click waiting to be appended to the store.
///
/// Created on the redirect path and handed to the background worker through
/// a bounded channel, so the redirect never waits on the click insert. If the
/// queue is full the event is dropped; the aggregate counter has already been
/// incremented at that point.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub ip: String,
    pub user_agent: Option<String>,
}
