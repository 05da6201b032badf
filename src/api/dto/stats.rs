//! DTOs for the per-link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::LinkStats;
use crate::domain::entities::Click;

/// Detailed statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub shortcode: String,
    pub destination: String,
    pub enabled: bool,
    pub is_zip: bool,
    pub total_clicks: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Most recent click events, newest first.
    pub recent_clicks: Vec<ClickInfo>,
}

/// A single recorded click.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub ip: String,
    pub user_agent: Option<String>,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.clicked_at,
            ip: click.ip,
            user_agent: click.user_agent,
        }
    }
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        let is_zip = stats.link.is_zip();

        Self {
            shortcode: stats.link.code,
            destination: stats.link.destination,
            enabled: stats.link.enabled,
            is_zip,
            total_clicks: stats.link.clicks,
            created: stats.link.created_at,
            updated: stats.link.updated_at,
            recent_clicks: stats.recent_clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
