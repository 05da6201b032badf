//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations over the [`crate::domain::repositories::LinkStore`]
//! contract and expose a clean API for the HTTP handlers and the CLI.
//!
//! - [`services::AdminService`] - create / update / enable / disable / list / stats
//! - [`services::ResolverService`] - redirect resolution for visitor requests
//! - [`services::ClickRecorder`] - best-effort click counting and telemetry

pub mod services;
