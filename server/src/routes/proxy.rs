//! Forward `/api/*` requests to the REST backend.
//!
//! DESIGN
//! ======
//! Method, path, query string and body are passed through unchanged. Only a
//! small allow-list of headers crosses the proxy in either direction; hop
//! headers like `Host` and `Connection` are left to each side's client.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Path prefix the browser uses for backend calls.
pub const API_PREFIX: &str = "/api";

const REQUEST_HEADERS: &[&str] = &["content-type", "accept", "accept-language"];

const RESPONSE_HEADERS: &[&str] = &["content-type", "cache-control", "content-disposition", "etag", "last-modified"];

/// Backend URL for a proxied request URI: `/api/horses?x=1` becomes
/// `{backend_url}/horses?x=1`.
pub fn target_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let rest = path_and_query.strip_prefix(API_PREFIX).unwrap_or(path_and_query);
    if rest.is_empty() || rest.starts_with('?') {
        format!("{backend_url}/{rest}")
    } else {
        format!("{backend_url}{rest}")
    }
}

fn copy_headers(from: &HeaderMap, names: &[&'static str]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        if let Some(value) = from.get(*name) {
            out.insert(HeaderName::from_static(name), value.clone());
        }
    }
    out
}

/// Any-method handler for `/api/{*path}`.
///
/// # Errors
///
/// Returns `ProxyError` when the backend cannot be reached or times out.
/// Backend error statuses are passed through as-is.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = target_url(&state.backend_url, &uri);

    let mut request = state
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers, REQUEST_HEADERS));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "backend request failed");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    tracing::debug!(%method, %url, %status, "proxied");

    let response_headers = copy_headers(upstream.headers(), RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "backend response body failed");
        ProxyError::from(e)
    })?;

    Ok((status, response_headers, bytes).into_response())
}
