//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the REST backend, without a trailing `/`.
    pub backend_url: String,
    pub proxy_timeout_secs: u64,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("BACKEND_URL must be an http(s) URL, got {0:?}")]
    BackendUrl(String),
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8080`
    /// - `PROXY_TIMEOUT_SECS`: default 30, must be positive
    /// - `PROXY_MAX_BODY_BYTES`: default 10 MiB
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let backend_url = get("BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::BackendUrl(backend_url));
        }
        let proxy_timeout_secs = parse_or(get("PROXY_TIMEOUT_SECS"), "PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        if proxy_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", value: "0".to_owned() });
        }
        let max_body_bytes = parse_or(get("PROXY_MAX_BODY_BYTES"), "PROXY_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self { port, backend_url, proxy_timeout_secs, max_body_bytes })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
