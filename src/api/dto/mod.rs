//! Data Transfer Objects for request/response serialization.

pub mod create;
pub mod health;
pub mod list;
pub mod stats;
