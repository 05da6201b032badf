//! Repository trait definitions for the domain layer.
//!
//! Traits here define the persistence contract; concrete implementations live
//! in `crate::infrastructure::persistence`, and mockall mocks are generated
//! under test.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
