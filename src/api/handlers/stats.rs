//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns counters and recent click events for one link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Responses
///
/// - **200 OK**: statistics payload with recent clicks, newest first
/// - **404 Not Found**: no such shortcode
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.admin_service.stats(&code).await?;

    Ok(Json(StatsResponse::from(stats)))
}
