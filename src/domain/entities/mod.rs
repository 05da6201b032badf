//! Core domain entities for the URL forwarder.
//!
//! - [`Link`] - A short code mapped to a destination URL
//! - [`Click`] - One resolution event against an enabled link
//! - [`LinkPatch`] - Partial update applied through the store

pub mod click;
pub mod link;

pub use click::Click;
pub use link::{Link, LinkPatch};
