//! Connection settings for the catalog API.
//!
//! Both the base URL and the bearer token are required and have no
//! defaults. The client never reads them from the environment on its own;
//! callers build a [`CatalogConfig`] explicitly or opt into
//! [`CatalogConfig::from_env`].

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the catalog base URL
pub const BASE_URL_VAR: &str = "TMDB_BASE_URL";

/// Environment variable holding the bearer token
pub const TOKEN_VAR: &str = "TMDB_API_TOKEN";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Catalog base URL must not be empty")]
    EmptyBaseUrl,

    #[error("Catalog base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),

    #[error("Catalog bearer token must not be empty")]
    EmptyToken,

    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
    token: String,
    timeout: Option<Duration>,
}

impl CatalogConfig {
    /// Build a config from a base URL (e.g. `https://api.themoviedb.org/3`)
    /// and a bearer token. A trailing slash on the URL is dropped.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let token = token.into().trim().to_string();

        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        Ok(Self {
            base_url,
            token,
            timeout: None,
        })
    }

    /// Read [`BASE_URL_VAR`] and [`TOKEN_VAR`] from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var(BASE_URL_VAR).map_err(|_| ConfigError::MissingVar(BASE_URL_VAR))?;
        let token = std::env::var(TOKEN_VAR).map_err(|_| ConfigError::MissingVar(TOKEN_VAR))?;
        Self::new(base_url, token)
    }

    /// Per-request timeout enforced by the HTTP transport
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL for a resource path such as `/movie/550`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Keep the token out of logs.
impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = CatalogConfig::new("https://api.themoviedb.org/3/", "secret").unwrap();
        assert_eq!(config.base_url(), "https://api.themoviedb.org/3");
        assert_eq!(config.url_for("/movie/550"), "https://api.themoviedb.org/3/movie/550");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_new_rejects_missing_values() {
        assert_eq!(CatalogConfig::new("", "secret"), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(CatalogConfig::new("https://example.org", "  "), Err(ConfigError::EmptyToken));
        assert!(matches!(
            CatalogConfig::new("example.org", "secret"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = CatalogConfig::new("https://example.org", "super-secret").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_with_timeout() {
        let config = CatalogConfig::new("https://example.org", "secret")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    // The only test in this crate that touches the process environment, so
    // the steps run in sequence inside one test.
    #[test]
    fn test_from_env() {
        // SAFETY: no other test in this binary reads or writes these variables.
        unsafe {
            std::env::remove_var(BASE_URL_VAR);
            std::env::set_var(TOKEN_VAR, "env-secret");
        }
        assert_eq!(CatalogConfig::from_env(), Err(ConfigError::MissingVar(BASE_URL_VAR)));

        unsafe {
            std::env::set_var(BASE_URL_VAR, "https://api.themoviedb.org/3/");
            std::env::remove_var(TOKEN_VAR);
        }
        assert_eq!(CatalogConfig::from_env(), Err(ConfigError::MissingVar(TOKEN_VAR)));

        unsafe {
            std::env::set_var(TOKEN_VAR, "env-secret");
        }
        let config = CatalogConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "https://api.themoviedb.org/3");
        assert_eq!(config.token(), "env-secret");

        unsafe {
            std::env::remove_var(BASE_URL_VAR);
            std::env::remove_var(TOKEN_VAR);
        }
    }
}
