use std::env;

use url::Url;

use crate::error::ShopApiError;

/// Environment variable holding the shop backend base URL.
pub const API_URL_ENV: &str = "SHOPFRONT_API_URL";

/// Hostnames allowed to use plain HTTP for local development.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated base URL for the shop backend.
///
/// There is deliberately no compiled-in production origin; the URL always
/// comes from the host application or the environment.
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validates `base_url` and normalizes it for path joining.
    ///
    /// Rules:
    /// - must parse as a URL with a host
    /// - `localhost`/`127.0.0.1` may use any scheme
    /// - every other host must use HTTPS
    ///
    /// A trailing slash is trimmed so endpoint paths can start with `/`.
    pub fn new(base_url: &str) -> Result<Self, ShopApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ShopApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let host = parsed
            .host_str()
            .ok_or_else(|| ShopApiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL must include a host".to_owned(),
            })?;

        let is_localhost = LOCALHOST_DOMAINS
            .iter()
            .any(|&allowed| host.eq_ignore_ascii_case(allowed));
        if !is_localhost && parsed.scheme() != "https" {
            return Err(ShopApiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: format!(
                    "non-localhost hosts must use https, got '{}://'",
                    parsed.scheme()
                ),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Reads the base URL from [`API_URL_ENV`].
    ///
    /// There is no fallback: a deployment that wants the shop lookup must
    /// configure one.
    pub fn from_env() -> Result<Self, ShopApiError> {
        let base_url = env::var(API_URL_ENV).map_err(|_| ShopApiError::MissingBaseUrl {
            var: API_URL_ENV,
        })?;
        Self::new(&base_url)
    }

    /// The normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_hosts() {
        let config = ApiConfig::new("https://api.example.com").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_accepts_plain_http_on_localhost_only() {
        assert!(ApiConfig::new("http://localhost:4000").is_ok());
        assert!(ApiConfig::new("http://127.0.0.1:4000").is_ok());

        let err = ApiConfig::new("http://api.example.com").unwrap_err();
        assert!(matches!(err, ShopApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_garbage_and_hostless_urls() {
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("file:///tmp/shop").is_err());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
    }
}
