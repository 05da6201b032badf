//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::api::middleware::auth::ApiKey;
use crate::application::services::{AdminService, ResolverService};

#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<AdminService>,
    pub resolver_service: Arc<ResolverService>,
    pub api_key: ApiKey,
    /// Public base used to format short URLs in API responses.
    pub base_url: String,
    pub behind_proxy: bool,
}

impl AppState {
    /// Formats the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
