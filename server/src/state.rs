//! Shared server state.

use std::time::Duration;

use crate::config::AppConfig;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Pooled client used for every proxied request.
    pub http: reqwest::Client,
    pub backend_url: String,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Build state with a client whose requests time out after
    /// `proxy_timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns the client builder error if TLS initialisation fails.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { http, backend_url: config.backend_url.clone(), max_body_bytes: config.max_body_bytes })
    }
}
