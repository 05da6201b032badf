//! Best-effort client IP extraction from request headers.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the client IP for click telemetry.
///
/// When `behind_proxy` is set, the first entry of `X-Forwarded-For` (or
/// `X-Real-IP` as a fallback) wins; otherwise the peer socket address is
/// used. Returns `"unknown"` when nothing usable is available. This is
/// best-effort data: it feeds telemetry only and is never trusted for
/// authorization decisions.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return real_ip.to_string();
        }
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
