//! Handler for listing registered links.

use axum::{Json, extract::State};

use crate::api::dto::list::{LinkInfo, ListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered link.
///
/// # Endpoint
///
/// `GET /api/list`
///
/// Links are ordered with enabled ones first, each group oldest-updated
/// first, which surfaces stale enabled links for review.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, AppError> {
    let links = state.admin_service.list().await?;

    let urls: Vec<LinkInfo> = links
        .into_iter()
        .map(|link| LinkInfo {
            short_url: state.short_url(&link.code),
            is_zip: link.is_zip(),
            shortcode: link.code,
            destination: link.destination,
            enabled: link.enabled,
            clicks: link.clicks,
            created: link.created_at,
            updated: link.updated_at,
        })
        .collect();

    Ok(Json(ListResponse {
        count: urls.len(),
        urls,
    }))
}
