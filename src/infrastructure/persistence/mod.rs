//! Concrete [`crate::domain::repositories::LinkStore`] implementations.
//!
//! - [`PgLinkStore`] - PostgreSQL, the production backend
//! - [`MemoryLinkStore`] - process memory, for tests and local experiments

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
