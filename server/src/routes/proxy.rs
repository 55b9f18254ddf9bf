//! `/api/*` reverse proxy to the external REST backend.
//!
//! The request path after `/api` and the query string are appended to
//! `API_BASE_URL`. Only the headers the console needs are forwarded; the
//! upstream status and body are relayed unchanged so the browser sees the
//! backend's `{"detail": ...}` errors as-is. Upstream failures map to 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

const API_PREFIX: &str = "/api";
static FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];
pub(crate) const UPSTREAM_UNAVAILABLE: &str = "Upstream API unavailable";

/// Backend URL for a proxied request URI.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let path = uri.path().strip_prefix(API_PREFIX).unwrap_or(uri.path());
    let path = if path.is_empty() { "/" } else { path };
    let url = portal::api::join_url(base, path);
    match uri.query() {
        Some(query) if !query.is_empty() => format!("{url}?{query}"),
        _ => url,
    }
}

/// Subset of inbound headers passed to the backend.
pub(crate) fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        if let Some(value) = inbound.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`
pub async fn forward(State(state): State<AppState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let url = upstream_url(&state.config.api_base_url, &uri);
    let mut request = state.http.request(method.clone(), &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            return bad_gateway();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    match upstream.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
            let mut response = (status, bytes).into_response();
            if let Some(content_type) = content_type {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            response
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream body read failed");
            bad_gateway()
        }
    }
}

fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, Json(json!({ "detail": UPSTREAM_UNAVAILABLE }))).into_response()
}
