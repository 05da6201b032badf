//! Link entity representing a short code to destination mapping.

use chrono::{DateTime, Utc};

/// A short link record.
///
/// The short `code` is the primary key: globally unique, lowercase, and
/// immutable once created (there is no rename operation). The `destination`
/// is stored verbatim as supplied by the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub destination: String,
    /// Links start disabled and must be enabled explicitly before they resolve.
    pub enabled: bool,
    /// Aggregate click counter, maintained via the store's atomic increment.
    pub clicks: i64,
    /// Set once at creation, never touched again.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutating operation (enable, disable, update).
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a fresh record in its initial state: disabled, zero clicks,
    /// `created_at == updated_at == now`.
    pub fn new(code: String, destination: String, now: DateTime<Utc>) -> Self {
        Self {
            code,
            destination,
            enabled: false,
            clicks: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if the destination points at a zip archive.
    ///
    /// Zip destinations get an intermediate download confirmation page
    /// instead of an immediate redirect.
    pub fn is_zip(&self) -> bool {
        self.destination.to_ascii_lowercase().ends_with(".zip")
    }
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged. `updated_at` is not optional: every
/// mutation refreshes it.
#[derive(Debug, Clone)]
pub struct LinkPatch {
    pub destination: Option<String>,
    pub enabled: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl LinkPatch {
    /// Patch that flips only the enabled flag.
    pub fn set_enabled(enabled: bool, now: DateTime<Utc>) -> Self {
        Self {
            destination: None,
            enabled: Some(enabled),
            updated_at: now,
        }
    }

    /// Patch for a destination change. Always forces the link back to
    /// disabled so the operator re-enables it deliberately.
    pub fn set_destination(destination: String, now: DateTime<Utc>) -> Self {
        Self {
            destination: Some(destination),
            enabled: Some(false),
            updated_at: now,
        }
    }
}
