//! Error classification for REST calls.
//!
//! A transport failure (no HTTP response at all) and a proxy answer of
//! 502/504 both mean the backend cannot be reached; every other non-2xx
//! response carries the backend's own error body.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Message shown whenever the backend cannot be reached.
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Is the backend up?";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response was received, or the proxy could not reach the backend.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: ErrorBody },

    /// A success response body could not be decoded.
    #[error("response could not be decoded: {0}")]
    Decode(String),

    /// The request could not be assembled in the browser.
    #[error("request could not be built: {0}")]
    Request(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body text.
    pub fn from_response(status: u16, body_text: &str) -> Self {
        if matches!(status, 502 | 504) {
            return Self::Unreachable(format!("proxy answered {status}"));
        }
        let body = serde_json::from_str::<ErrorBody>(body_text).unwrap_or_default();
        Self::Status { status, body }
    }

    /// Not-found error carrying its own message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Status { status: 404, body: ErrorBody { message: Some(message.into()), errors: Vec::new() } }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// One-line message for toasts and banners.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unreachable(_) => BACKEND_UNREACHABLE_MESSAGE.to_owned(),
            Self::Status { status, body } => body
                .message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Request failed with status {status}")),
            Self::Decode(_) | Self::Request(_) => self.to_string(),
        }
    }

    /// Individual validation errors reported by the backend, if any.
    pub fn details(&self) -> &[String] {
        match self {
            Self::Status { body, .. } => &body.errors,
            _ => &[],
        }
    }
}
