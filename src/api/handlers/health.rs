//! Handlers for the health and version endpoints.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always returns 200 with a static payload. The probe intentionally does
/// not touch the database; a degraded store surfaces as 503s on the routes
/// that need it.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "finyeza",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Reports the running build version as plain text.
///
/// # Endpoint
///
/// `GET /version`
pub async fn version_handler() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
