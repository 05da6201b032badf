//! Background worker that persists click events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::Click;
use crate::domain::repositories::LinkStore;

/// Drains the click queue into the store.
///
/// Runs until every sender is dropped. Append failures are logged and the
/// event is discarded; the aggregate counter was already incremented on the
/// request path, so a lost event only widens the accepted gap between the
/// counter and the stored telemetry.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>, store: Arc<dyn LinkStore>) {
    while let Some(event) = rx.recv().await {
        let click = Click::new(event.clicked_at, event.ip, event.user_agent);

        match store.append_click(&event.code, click).await {
            Ok(()) => debug!(code = %event.code, "click appended"),
            Err(e) => warn!(code = %event.code, error = %e, "failed to append click"),
        }
    }

    debug!("click worker shutting down");
}
