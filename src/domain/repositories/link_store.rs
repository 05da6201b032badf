//! Store trait for short link persistence.

use crate::domain::entities::{Click, Link, LinkPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence contract for link records and their click telemetry.
///
/// The service never reaches past this trait: resolution and admin logic know
/// nothing about the physical storage layout. Reads of a single record must
/// reflect the most recent successful write to that record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-memory,
///   for tests and local experiments
///
/// # Failure
///
/// Any operation may return [`AppError::Unavailable`] on a transient backend
/// failure. Callers decide whether that is fatal (lookups, admin operations)
/// or swallowed (click recording).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Point lookup by short code.
    ///
    /// Returns `Ok(None)` when no record exists; storage failure is an error,
    /// never conflated with absence.
    async fn get(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new record atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same code exists.
    async fn create(&self, link: Link) -> Result<(), AppError>;

    /// Merges the given fields into an existing record without rewriting it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    async fn update_fields(&self, code: &str, patch: LinkPatch) -> Result<(), AppError>;

    /// Atomically adds `delta` to the click counter.
    ///
    /// This is the one operation that must be race-free under concurrent
    /// callers: it is delegated to the store's native increment, never
    /// implemented as read-modify-write in the service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    async fn increment_clicks(&self, code: &str, delta: i64) -> Result<(), AppError>;

    /// Appends a click to the link's telemetry. No uniqueness constraint.
    async fn append_click(&self, code: &str, click: Click) -> Result<(), AppError>;

    /// Full scan of all records. Order is unspecified; callers sort.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Filter scan on the enabled flag.
    async fn list_by_enabled(&self, enabled: bool) -> Result<Vec<Link>, AppError>;

    /// Up to `limit` most recent clicks for a link, newest first.
    async fn recent_clicks(&self, code: &str, limit: i64) -> Result<Vec<Click>, AppError>;
}
