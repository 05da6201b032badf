//! Short code resolution for the redirect path.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::application::services::ClickRecorder;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::shortcode::normalize_code;

/// Outcome of resolving a raw short code.
///
/// `NotFound` and `Disabled` are outcomes, not errors: the caller renders a
/// distinct response for each. Only a store failure on the lookup itself is
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// No record exists for the normalized code.
    NotFound,
    /// The record exists but is not enabled. Generates no click.
    Disabled,
    /// Enabled link whose destination is a zip archive; the caller renders a
    /// download confirmation page instead of redirecting.
    ZipDownload { destination: String },
    /// Enabled link; the caller issues a 302 to the destination verbatim.
    Redirect { destination: String },
}

/// Resolves visitor-supplied codes against the store.
pub struct ResolverService {
    store: Arc<dyn LinkStore>,
    recorder: ClickRecorder,
}

impl ResolverService {
    pub fn new(store: Arc<dyn LinkStore>, recorder: ClickRecorder) -> Self {
        Self { store, recorder }
    }

    /// Resolves a raw code into a [`Resolution`].
    ///
    /// The input is trimmed and lowercased before lookup, so resolution is
    /// case-insensitive. For the two successful outcomes a click is recorded
    /// (best-effort) before returning; recording failure never blocks the
    /// resolution.
    ///
    /// # Errors
    ///
    /// Propagates the store error when the lookup itself fails. There are no
    /// retries here.
    pub async fn resolve(
        &self,
        raw_code: &str,
        ip: String,
        user_agent: Option<String>,
    ) -> Result<Resolution, AppError> {
        let code = normalize_code(raw_code);

        let Some(link) = self.store.get(&code).await? else {
            return Ok(Resolution::NotFound);
        };

        if !link.enabled {
            debug!(code = %code, "resolved disabled link");
            return Ok(Resolution::Disabled);
        }

        self.recorder.record(&code, ip, user_agent, Utc::now()).await;

        if link.is_zip() {
            Ok(Resolution::ZipDownload {
                destination: link.destination,
            })
        } else {
            Ok(Resolution::Redirect {
                destination: link.destination,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkStore;
    use serde_json::json;
    use tokio::sync::mpsc;

    fn link(code: &str, destination: &str, enabled: bool) -> Link {
        let mut link = Link::new(code.to_string(), destination.to_string(), Utc::now());
        link.enabled = enabled;
        link
    }

    fn resolver(
        store: MockLinkStore,
    ) -> (
        ResolverService,
        mpsc::Receiver<crate::domain::click_event::ClickEvent>,
    ) {
        let store: Arc<dyn LinkStore> = Arc::new(store);
        let (tx, rx) = mpsc::channel(16);
        let recorder = ClickRecorder::new(store.clone(), tx);
        (ResolverService::new(store, recorder), rx)
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(1).returning(|_| Ok(None));
        store.expect_increment_clicks().times(0);

        let (resolver, _rx) = resolver(store);
        let result = resolver
            .resolve("missing", "unknown".to_string(), None)
            .await
            .unwrap();

        assert_eq!(result, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_disabled_generates_no_click() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some(link("proj", "https://example.com", false))));
        store.expect_increment_clicks().times(0);

        let (resolver, _rx) = resolver(store);
        let result = resolver
            .resolve("proj", "unknown".to_string(), None)
            .await
            .unwrap();

        assert_eq!(result, Resolution::Disabled);
    }

    #[tokio::test]
    async fn test_resolve_enabled_redirects_and_counts() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some(link("proj", "https://example.com/a", true))));
        store
            .expect_increment_clicks()
            .withf(|code, delta| code == "proj" && *delta == 1)
            .times(1)
            .returning(|_, _| Ok(()));

        let (resolver, _rx) = resolver(store);
        let result = resolver
            .resolve("proj", "1.2.3.4".to_string(), None)
            .await
            .unwrap();

        assert_eq!(
            result,
            Resolution::Redirect {
                destination: "https://example.com/a".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_zip_destination() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some(link("files", "https://x.com/a.ZIP", true))));
        store
            .expect_increment_clicks()
            .times(1)
            .returning(|_, _| Ok(()));

        let (resolver, _rx) = resolver(store);
        let result = resolver
            .resolve("files", "unknown".to_string(), None)
            .await
            .unwrap();

        assert_eq!(
            result,
            Resolution::ZipDownload {
                destination: "https://x.com/a.ZIP".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_normalizes_case_before_lookup() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .withf(|code| code == "case-test")
            .times(1)
            .returning(|_| Ok(Some(link("case-test", "https://example.com", true))));
        store
            .expect_increment_clicks()
            .times(1)
            .returning(|_, _| Ok(()));

        let (resolver, _rx) = resolver(store);
        let result = resolver
            .resolve("  CASE-Test ", "unknown".to_string(), None)
            .await
            .unwrap();

        assert!(matches!(result, Resolution::Redirect { .. }));
    }

    #[tokio::test]
    async fn test_resolve_succeeds_when_click_recording_fails() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some(link("proj", "https://example.com", true))));
        store
            .expect_increment_clicks()
            .times(1)
            .returning(|_, _| Err(AppError::unavailable("down", json!({}))));

        let (resolver, _rx) = resolver(store);
        let result = resolver
            .resolve("proj", "unknown".to_string(), None)
            .await
            .unwrap();

        assert!(matches!(result, Resolution::Redirect { .. }));
    }

    #[tokio::test]
    async fn test_resolve_propagates_lookup_failure() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(AppError::unavailable("down", json!({}))));
        store.expect_increment_clicks().times(0);

        let (resolver, _rx) = resolver(store);
        let result = resolver
            .resolve("proj", "unknown".to_string(), None)
            .await;

        assert!(matches!(result, Err(AppError::Unavailable { .. })));
    }
}
