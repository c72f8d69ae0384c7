//! Harness configuration
//!
//! Resolves the target API base URL from the environment (with `.env`
//! support) or an explicit override. A missing base URL is fatal at startup,
//! before any case runs.

use std::time::Duration;

use url::Url;

use crate::errors::{HarnessError, HarnessResult};

/// Environment variable holding the target API base URL
pub const BASE_URL_ENV: &str = "BOOKSTORE_BASE_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl HarnessConfig {
    /// Resolve configuration, preferring an explicit override over the environment.
    pub fn resolve(override_url: Option<&str>) -> HarnessResult<Self> {
        dotenv::dotenv().ok();

        let raw = match override_url {
            Some(url) => url.to_string(),
            None => std::env::var(BASE_URL_ENV).map_err(|_| HarnessError::Config {
                message: format!("{} is not set and no --base-url was given", BASE_URL_ENV),
            })?,
        };

        Self::from_base_url(&raw)
    }

    /// Build a configuration from a known base URL string.
    pub fn from_base_url(raw: &str) -> HarnessResult<Self> {
        // Collection paths are joined with a leading slash, so the base must not
        // end with one.
        let base_url = Url::parse(raw.trim_end_matches('/'))?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_base_url_strips_trailing_slashes() {
        let config = HarnessConfig::from_base_url("http://localhost:3000/").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.base_url.path(), "/");
    }

    #[test]
    fn resolve_prefers_explicit_override() {
        let config = HarnessConfig::resolve(Some("http://fake.example:8080")).unwrap();
        assert_eq!(config.base_url.host_str(), Some("fake.example"));
        assert_eq!(config.base_url.port(), Some(8080));
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        let err = HarnessConfig::from_base_url("not a url").unwrap_err();
        assert!(matches!(err, HarnessError::InvalidBaseUrl(_)));
    }

    #[test]
    fn default_timeout_is_applied() {
        let config = HarnessConfig::from_base_url("http://localhost:3000").unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        let config = config.with_timeout(Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
