//! In-memory implementation of the link store.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Click, Link, LinkPatch};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: HashMap<String, Link>,
    clicks: HashMap<String, Vec<Click>>,
}

/// [`LinkStore`] backed by process memory.
///
/// Used by the integration tests and for local experiments; nothing survives
/// a restart. All mutations go through a single `RwLock`, which makes the
/// counter increment atomic across concurrent callers.
#[derive(Default)]
pub struct MemoryLinkStore {
    inner: RwLock<Inner>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Shortcode not found", json!({ "code": code }))
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.inner.read().await.links.get(code).cloned())
    }

    async fn create(&self, link: Link) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(&link.code) {
            return Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "code": link.code }),
            ));
        }

        inner.links.insert(link.code.clone(), link);
        Ok(())
    }

    async fn update_fields(&self, code: &str, patch: LinkPatch) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;

        let link = inner.links.get_mut(code).ok_or_else(|| not_found(code))?;

        if let Some(destination) = patch.destination {
            link.destination = destination;
        }
        if let Some(enabled) = patch.enabled {
            link.enabled = enabled;
        }
        link.updated_at = patch.updated_at;

        Ok(())
    }

    async fn increment_clicks(&self, code: &str, delta: i64) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;

        let link = inner.links.get_mut(code).ok_or_else(|| not_found(code))?;
        link.clicks += delta;

        Ok(())
    }

    async fn append_click(&self, code: &str, click: Click) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner.clicks.entry(code.to_string()).or_default().push(click);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.inner.read().await.links.values().cloned().collect())
    }

    async fn list_by_enabled(&self, enabled: bool) -> Result<Vec<Link>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .links
            .values()
            .filter(|l| l.enabled == enabled)
            .cloned()
            .collect())
    }

    async fn recent_clicks(&self, code: &str, limit: i64) -> Result<Vec<Click>, AppError> {
        let inner = self.inner.read().await;

        let mut clicks = inner.clicks.get(code).cloned().unwrap_or_default();
        clicks.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at));
        clicks.truncate(limit.max(0) as usize);

        Ok(clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn link(code: &str) -> Link {
        Link::new(code.to_string(), "https://example.com".to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let store = MemoryLinkStore::new();
        store.create(link("proj")).await.unwrap();

        let fetched = store.get("proj").await.unwrap().unwrap();
        assert_eq!(fetched.code, "proj");
        assert!(!fetched.enabled);
        assert_eq!(fetched.clicks, 0);
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts_and_preserves_first() {
        let store = MemoryLinkStore::new();
        store.create(link("proj")).await.unwrap();

        let mut second = link("proj");
        second.destination = "https://other.example.com".to_string();
        let result = store.create(second).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        let fetched = store.get("proj").await.unwrap().unwrap();
        assert_eq!(fetched.destination, "https://example.com");
    }

    #[tokio::test]
    async fn test_update_fields_merges_partially() {
        let store = MemoryLinkStore::new();
        store.create(link("proj")).await.unwrap();

        let later = Utc::now() + Duration::seconds(5);
        store
            .update_fields("proj", LinkPatch::set_enabled(true, later))
            .await
            .unwrap();

        let fetched = store.get("proj").await.unwrap().unwrap();
        assert!(fetched.enabled);
        assert_eq!(fetched.destination, "https://example.com");
        assert_eq!(fetched.updated_at, later);
    }

    #[tokio::test]
    async fn test_update_fields_absent_code() {
        let store = MemoryLinkStore::new();
        let result = store
            .update_fields("ghost", LinkPatch::set_enabled(true, Utc::now()))
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_increments_do_not_lose_updates() {
        let store = std::sync::Arc::new(MemoryLinkStore::new());
        store.create(link("proj")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.increment_clicks("proj", 1).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let fetched = store.get("proj").await.unwrap().unwrap();
        assert_eq!(fetched.clicks, 50);
    }

    #[tokio::test]
    async fn test_recent_clicks_newest_first_with_limit() {
        let store = MemoryLinkStore::new();
        store.create(link("proj")).await.unwrap();

        let base = Utc::now();
        for i in 0..5 {
            store
                .append_click(
                    "proj",
                    Click::new(base + Duration::seconds(i), format!("10.0.0.{i}"), None),
                )
                .await
                .unwrap();
        }

        let clicks = store.recent_clicks("proj", 3).await.unwrap();

        assert_eq!(clicks.len(), 3);
        assert_eq!(clicks[0].ip, "10.0.0.4");
        assert_eq!(clicks[2].ip, "10.0.0.2");
    }

    #[tokio::test]
    async fn test_list_by_enabled_filters() {
        let store = MemoryLinkStore::new();
        store.create(link("off")).await.unwrap();
        store.create(link("on")).await.unwrap();
        store
            .update_fields("on", LinkPatch::set_enabled(true, Utc::now()))
            .await
            .unwrap();

        let enabled = store.list_by_enabled(true).await.unwrap();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].code, "on");

        let disabled = store.list_by_enabled(false).await.unwrap();
        assert_eq!(disabled.len(), 1);
        assert_eq!(disabled[0].code, "off");
    }
}
