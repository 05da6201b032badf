//! Handler for link creation.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::dto::create::{CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new short link.
///
/// # Endpoint
///
/// `POST /api/create`
///
/// # Request Body
///
/// ```json
/// { "shortcode": "proj", "destination": "https://example.com/project" }
/// ```
///
/// # Responses
///
/// - **201 Created**: link registered, disabled by default
/// - **400 Bad Request**: missing field, invalid code, or invalid destination
/// - **409 Conflict**: the shortcode already exists
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let shortcode = payload.shortcode.ok_or_else(|| {
        AppError::bad_request("Missing field: shortcode", json!({ "field": "shortcode" }))
    })?;
    let destination = payload.destination.ok_or_else(|| {
        AppError::bad_request(
            "Missing field: destination",
            json!({ "field": "destination" }),
        )
    })?;

    let link = state.admin_service.create(&shortcode, &destination).await?;

    let response = CreateResponse {
        short_url: state.short_url(&link.code),
        shortcode: link.code,
        destination: link.destination,
        enabled: link.enabled,
        created: link.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
