//! API route configuration.
//!
//! All API endpoints require the `X-API-Key` header, enforced by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{create_handler, list_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, protected by API key authentication.
///
/// # Endpoints
///
/// - `POST /create`       - Register a new short link (created disabled)
/// - `GET  /stats/{code}` - Counters and recent clicks for one link
/// - `GET  /list`         - Every registered link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/list", get(list_handler))
}
