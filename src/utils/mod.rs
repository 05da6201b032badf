//! Utility functions shared across the service.
//!
//! - [`shortcode`] - Short code normalization and validation
//! - [`client_ip`] - Best-effort client IP extraction

pub mod client_ip;
pub mod shortcode;
