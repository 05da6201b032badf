//! Link administration: creation, updates, enablement, and listing.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{Click, Link, LinkPatch};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::shortcode::{normalize_code, validate_code, validate_destination};

/// Maximum number of recent clicks returned by [`AdminService::stats`].
pub const RECENT_CLICKS_LIMIT: i64 = 100;

/// Result of a destination update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Destination changed; the link was forced back to disabled.
    Updated(Link),
    /// New destination was byte-identical to the current one; nothing written.
    Unchanged,
}

/// Statistics for a single link: the record plus recent telemetry.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    /// Newest first, capped at [`RECENT_CLICKS_LIMIT`].
    pub recent_clicks: Vec<Click>,
}

/// Operator-facing operations over link records.
///
/// Every mutation walks the state machine
/// `absent -> created(disabled) <-> {enabled, disabled}` and refreshes
/// `updated_at`. Codes are normalized before any store access, so admin
/// operations are case-insensitive like resolution.
pub struct AdminService {
    store: Arc<dyn LinkStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Creates a new link in the disabled state.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] on bad code syntax or destination scheme
    /// - [`AppError::Conflict`] if the code is already taken
    pub async fn create(&self, raw_code: &str, destination: &str) -> Result<Link, AppError> {
        let code = normalize_code(raw_code);
        validate_code(&code)?;
        validate_destination(destination)?;

        let link = Link::new(code.clone(), destination.to_string(), Utc::now());
        self.store.create(link.clone()).await?;

        info!(code = %code, destination = %destination, "link created");
        Ok(link)
    }

    /// Points an existing link at a new destination.
    ///
    /// A successful update always forces the link back to disabled and
    /// refreshes `updated_at`; re-enabling is a deliberate second step.
    /// Passing the current destination is a reported no-op, not an error.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is absent
    /// - [`AppError::Validation`] on a bad destination scheme
    pub async fn update(
        &self,
        raw_code: &str,
        destination: &str,
    ) -> Result<UpdateOutcome, AppError> {
        let code = normalize_code(raw_code);

        let link = self.get_existing(&code).await?;

        if link.destination == destination {
            return Ok(UpdateOutcome::Unchanged);
        }

        validate_destination(destination)?;

        let patch = LinkPatch::set_destination(destination.to_string(), Utc::now());
        self.store.update_fields(&code, patch.clone()).await?;

        info!(code = %code, destination = %destination, "link destination updated");
        Ok(UpdateOutcome::Updated(Link {
            destination: destination.to_string(),
            enabled: false,
            updated_at: patch.updated_at,
            ..link
        }))
    }

    /// Enables a link. Idempotent: enabling an already-enabled link succeeds
    /// and still refreshes `updated_at`.
    pub async fn enable(&self, raw_code: &str) -> Result<(), AppError> {
        self.set_enabled(raw_code, true).await
    }

    /// Disables a link. Idempotent like [`Self::enable`].
    pub async fn disable(&self, raw_code: &str) -> Result<(), AppError> {
        self.set_enabled(raw_code, false).await
    }

    async fn set_enabled(&self, raw_code: &str, enabled: bool) -> Result<(), AppError> {
        let code = normalize_code(raw_code);
        self.get_existing(&code).await?;

        self.store
            .update_fields(&code, LinkPatch::set_enabled(enabled, Utc::now()))
            .await?;

        info!(code = %code, enabled = enabled, "link enablement changed");
        Ok(())
    }

    /// Disables every currently-enabled link.
    ///
    /// Per-record failures are logged individually and skipped; the returned
    /// count covers only records actually disabled.
    pub async fn disable_all(&self) -> Result<usize, AppError> {
        let enabled = self.store.list_by_enabled(true).await?;

        let mut disabled = 0;
        for link in enabled {
            let patch = LinkPatch::set_enabled(false, Utc::now());
            match self.store.update_fields(&link.code, patch).await {
                Ok(()) => disabled += 1,
                Err(e) => warn!(code = %link.code, error = %e, "failed to disable link"),
            }
        }

        info!(count = disabled, "disabled all enabled links");
        Ok(disabled)
    }

    /// Lists all links, enabled first, each group oldest-updated first.
    ///
    /// The policy is one stable comparator: `enabled` descending, then
    /// `updated_at` ascending.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links = self.store.list_all().await?;

        links.sort_by(|a, b| {
            b.enabled
                .cmp(&a.enabled)
                .then(a.updated_at.cmp(&b.updated_at))
        });

        Ok(links)
    }

    /// Returns the link and its most recent clicks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    pub async fn stats(&self, raw_code: &str) -> Result<LinkStats, AppError> {
        let code = normalize_code(raw_code);
        let link = self.get_existing(&code).await?;

        let recent_clicks = self.store.recent_clicks(&code, RECENT_CLICKS_LIMIT).await?;

        Ok(LinkStats {
            link,
            recent_clicks,
        })
    }

    async fn get_existing(&self, code: &str) -> Result<Link, AppError> {
        self.store.get(code).await?.ok_or_else(|| {
            AppError::not_found("Shortcode not found", json!({ "code": code }))
        })
    }
}
