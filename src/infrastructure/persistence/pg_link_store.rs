//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, Link, LinkPatch};
use crate::domain::repositories::LinkStore;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL-backed [`LinkStore`].
///
/// The counter increment is delegated to a single `UPDATE ... clicks + $n`
/// statement so concurrent clicks never lose updates. Queries are bound at
/// runtime, so the crate builds without a reachable database.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    destination: String,
    enabled: bool,
    clicks: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            code: row.code,
            destination: row.destination,
            enabled: row.enabled,
            clicks: row.clicks,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    clicked_at: DateTime<Utc>,
    ip: String,
    user_agent: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            clicked_at: row.clicked_at,
            ip: row.ip,
            user_agent: row.user_agent,
        }
    }
}

const LINK_COLUMNS: &str = "code, destination, enabled, clicks, created_at, updated_at";

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn get(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Link::from))
    }

    async fn create(&self, link: Link) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO links (code, destination, enabled, clicks, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&link.code)
        .bind(&link.destination)
        .bind(link.enabled)
        .bind(link.clicks)
        .bind(link.created_at)
        .bind(link.updated_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| match map_sqlx_error(e) {
            AppError::Conflict { .. } => AppError::conflict(
                "Shortcode already exists",
                json!({ "code": link.code }),
            ),
            other => other,
        })?;

        Ok(())
    }

    async fn update_fields(&self, code: &str, patch: LinkPatch) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE links SET \
                 destination = COALESCE($2, destination), \
                 enabled = COALESCE($3, enabled), \
                 updated_at = $4 \
             WHERE code = $1",
        )
        .bind(code)
        .bind(patch.destination)
        .bind(patch.enabled)
        .bind(patch.updated_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Shortcode not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    async fn increment_clicks(&self, code: &str, delta: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE links SET clicks = clicks + $2 WHERE code = $1")
            .bind(code)
            .bind(delta)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Shortcode not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    async fn append_click(&self, code: &str, click: Click) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO link_clicks (code, clicked_at, ip, user_agent) VALUES ($1, $2, $3, $4)",
        )
        .bind(code)
        .bind(click.clicked_at)
        .bind(&click.ip)
        .bind(&click.user_agent)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows =
            sqlx::query_as::<_, LinkRow>(&format!("SELECT {LINK_COLUMNS} FROM links"))
                .fetch_all(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn list_by_enabled(&self, enabled: bool) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE enabled = $1"
        ))
        .bind(enabled)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn recent_clicks(&self, code: &str, limit: i64) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            "SELECT clicked_at, ip, user_agent FROM link_clicks \
             WHERE code = $1 ORDER BY clicked_at DESC LIMIT $2",
        )
        .bind(code)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Click::from).collect())
    }
}
