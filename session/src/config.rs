//! Client configuration shared by every front end.
//!
//! The CLI fills it from flags and `AUTH_*` environment variables, the browser
//! from values baked in at build time; both parse the timeout with
//! [`parse_timeout_secs`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL {0:?}: expected http:// or https://")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Authority origin, without a trailing slash.
    pub base_url: String,
    /// Upper bound for any single request; exceeding it is a transport failure.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build a config, validating and normalizing the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL is http(s).
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, request_timeout })
    }

    /// Request timeout in whole milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.request_timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Parse an `AUTH_REQUEST_TIMEOUT_SECS` value.
///
/// Zero and unparsable input fall back to [`DEFAULT_REQUEST_TIMEOUT_SECS`].
#[must_use]
pub fn parse_timeout_secs(raw: &str) -> u64 {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
