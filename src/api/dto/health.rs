//! DTO for the health endpoint.

use serde::Serialize;

/// Static health check payload.
///
/// Deliberately does not touch the database: the probe reports process
/// liveness so it stays cheap enough for aggressive polling.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
