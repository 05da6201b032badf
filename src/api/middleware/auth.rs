//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::{error::AppError, state::AppState};

/// Request header carrying the admin API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Pre-hashed API key for fixed-time comparison.
///
/// Both sides are reduced to SHA-256 digests before comparing, so the
/// comparison touches a fixed number of bytes regardless of how much of
/// the presented key matches.
#[derive(Clone)]
pub struct ApiKey {
    digest: [u8; 32],
}

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }

    /// Compares a presented key against the configured secret in fixed time.
    pub fn matches(&self, presented: &str) -> bool {
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        self.digest.ct_eq(&presented).into()
    }
}

/// Authenticates requests using the `X-API-Key` header.
///
/// Runs before any store access: an unauthenticated request never touches
/// the database, whether or not the target shortcode exists.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8,
/// or does not match the configured key.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "X-API-Key header is missing or invalid" }),
            )
        })?;

    if !st.api_key.matches(presented) {
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Invalid API key" }),
        ));
    }

    Ok(next.run(req).await)
}
