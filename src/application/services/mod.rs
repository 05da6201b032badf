//! Business logic services for the application layer.

pub mod admin_service;
pub mod click_recorder;
pub mod resolver_service;

pub use admin_service::{AdminService, LinkStats, UpdateOutcome};
pub use click_recorder::ClickRecorder;
pub use resolver_service::{Resolution, ResolverService};
