//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    /// The backend URL must be absolute http(s).
    #[error("invalid API_BASE_URL: {0}")]
    InvalidBaseUrl(String),

    #[error("http client build failed: {0}")]
    HttpClient(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `PROXY_TIMEOUT_SECS`: default 30, must be non-zero
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty());

        let port = match present("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = present("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(api_base_url));
        }
        let api_base_url = api_base_url.trim_end_matches('/').to_owned();

        let timeout_secs = match present("PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        Ok(Self { port, api_base_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}
