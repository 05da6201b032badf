//! Best-effort click recording.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkStore;

/// Records clicks without ever degrading redirect availability.
///
/// A click is two independent store operations:
///
/// 1. an atomic `clicks + 1` increment, issued synchronously so that N
///    concurrent resolutions net exactly +N;
/// 2. a telemetry append, pushed onto a bounded queue and written by the
///    background worker, so the redirect never waits on it.
///
/// Neither operation's failure reaches the caller; both are logged. The two
/// are deliberately not transactional with each other, so the counter may run
/// ahead of the stored click rows. There is no deduplication, rate limiting,
/// or bot filtering: every resolved request counts.
#[derive(Clone)]
pub struct ClickRecorder {
    store: Arc<dyn LinkStore>,
    tx: mpsc::Sender<ClickEvent>,
}

impl ClickRecorder {
    pub fn new(store: Arc<dyn LinkStore>, tx: mpsc::Sender<ClickEvent>) -> Self {
        Self { store, tx }
    }

    /// Records one click against `code`.
    pub async fn record(
        &self,
        code: &str,
        ip: String,
        user_agent: Option<String>,
        now: DateTime<Utc>,
    ) {
        if let Err(e) = self.store.increment_clicks(code, 1).await {
            warn!(code = %code, error = %e, "failed to increment click counter");
        }

        let event = ClickEvent {
            code: code.to_string(),
            clicked_at: now,
            ip,
            user_agent,
        };

        if let Err(e) = self.tx.try_send(event) {
            warn!(code = %code, error = %e, "click event dropped");
        }
    }
}
