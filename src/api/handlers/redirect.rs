//! Handler for short link redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::application::services::Resolution;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;
use crate::utils::shortcode::normalize_code;

/// Resolves a short code and forwards the visitor.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found**: Location header carries the stored destination verbatim
/// - **200 OK**: download confirmation page when the destination is a zip
/// - **403 Forbidden**: the link exists but is disabled (no click recorded)
/// - **404 Not Found**: no such code
///
/// Lookup is case-insensitive; `/PROJ` resolves the code `proj`. For the
/// 302 and 200 outcomes a click is recorded before the response is built.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let ip = client_ip(&headers, Some(addr), state.behind_proxy);
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let resolution = state.resolver_service.resolve(&code, ip, user_agent).await?;

    let response = match resolution {
        Resolution::NotFound => {
            (StatusCode::NOT_FOUND, "Short link not found").into_response()
        }
        Resolution::Disabled => {
            (StatusCode::FORBIDDEN, "This short link is disabled").into_response()
        }
        Resolution::ZipDownload { destination } => {
            Html(download_page(&normalize_code(&code), &destination)).into_response()
        }
        // axum's Redirect helper has no 302 variant, so the status and
        // Location header are set by hand. The destination goes out verbatim.
        Resolution::Redirect { destination } => {
            (StatusCode::FOUND, [(header::LOCATION, destination)]).into_response()
        }
    };

    Ok(response)
}

/// Renders the download confirmation page for zip destinations.
///
/// Zip links get an interstitial instead of a redirect so browsers do not
/// silently trigger a file download.
fn download_page(code: &str, destination: &str) -> String {
    let href = escape_html(destination);
    let code = escape_html(code);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Download ready: {code}</title></head>\n\
         <body>\n\
         <h1>Your download is ready</h1>\n\
         <p>Short link: <strong>{code}</strong></p>\n\
         <p><a href=\"{href}\" download>Click here to download</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML attribute/text escaping for the interstitial page.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
