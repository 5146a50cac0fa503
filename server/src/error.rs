//! Proxy failures and their HTTP mapping.
//!
//! The body mirrors the backend's own error shape so the browser client
//! parses both the same way.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend did not answer in time: {0}")]
    Timeout(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout(e.to_string()) } else { Self::Unreachable(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.to_string(), "errors": [] });
        (self.status(), Json(body)).into_response()
    }
}
