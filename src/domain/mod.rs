//! Domain layer: entities, the store contract, and click processing.
//!
//! The domain layer has no dependency on infrastructure or the HTTP layer.
//! Click processing flow:
//!
//! 1. The resolver records a click for every successful resolution
//! 2. The counter increment happens synchronously through [`repositories::LinkStore`]
//! 3. The [`click_event::ClickEvent`] is queued for the background
//!    [`click_worker::run_click_worker`], which appends the telemetry row

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
