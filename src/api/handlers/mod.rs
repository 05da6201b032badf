//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod create;
pub mod health;
pub mod list;
pub mod redirect;
pub mod stats;

pub use create::create_handler;
pub use health::{health_handler, version_handler};
pub use list::list_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
