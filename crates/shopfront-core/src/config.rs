//! Client configuration model.
//!
//! Values come from up to three layers (config file, environment, defaults).
//! Loading the layers is the infrastructure crate's job; this module only
//! merges them and validates the result.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Origin used when neither the file nor the environment names one.
pub const DEFAULT_ORIGIN: &str = "http://localhost";
/// Same-origin proxy path that routes all traffic through the gateway.
pub const DEFAULT_BASE_PATH: &str = "/api";
/// Per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// One partially-filled configuration layer.
///
/// This is the shape of `client.toml` and of the environment overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Absolute API base URL, or a path such as `/api` resolved against `origin`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientSettings {
    /// Fills unset (or blank) fields of `self` from `lower`.
    pub fn or(self, lower: ClientSettings) -> ClientSettings {
        ClientSettings {
            base_url: non_blank(self.base_url).or_else(|| non_blank(lower.base_url)),
            origin: non_blank(self.origin).or_else(|| non_blank(lower.origin)),
            timeout_secs: self
                .timeout_secs
                .filter(|s| *s > 0)
                .or(lower.timeout_secs.filter(|s| *s > 0)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolved settings used to build the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the final configuration from merged settings.
    ///
    /// A relative `base_url` is joined to `origin`; a missing one falls back to
    /// the same-origin `/api` path.
    pub fn from_settings(settings: ClientSettings) -> Self {
        let origin = non_blank(settings.origin).unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let base = non_blank(settings.base_url).unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        let base_url = if base.starts_with("http://") || base.starts_with("https://") {
            base
        } else {
            format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                base.trim_start_matches('/')
            )
        };

        let timeout_secs = settings
            .timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs))
    }

    /// Joins a relative API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_settings(ClientSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin_proxy() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost/api");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_relative_base_joins_origin() {
        let config = ClientConfig::from_settings(ClientSettings {
            base_url: Some("/gateway/v1/".to_string()),
            origin: Some("https://shop.example.com/".to_string()),
            timeout_secs: None,
        });
        assert_eq!(config.base_url, "https://shop.example.com/gateway/v1");
    }

    #[test]
    fn test_absolute_base_ignores_origin() {
        let config = ClientConfig::from_settings(ClientSettings {
            base_url: Some("https://api.example.com".to_string()),
            origin: Some("https://shop.example.com".to_string()),
            timeout_secs: Some(3),
        });
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_upper_layer_wins_and_blanks_fall_through() {
        let file = ClientSettings {
            base_url: Some("  ".to_string()),
            origin: Some("https://file.example.com".to_string()),
            timeout_secs: Some(0),
        };
        let env = ClientSettings {
            base_url: Some("https://env.example.com/api".to_string()),
            origin: Some("https://env.example.com".to_string()),
            timeout_secs: Some(30),
        };
        let merged = file.or(env);
        assert_eq!(merged.base_url.as_deref(), Some("https://env.example.com/api"));
        assert_eq!(merged.origin.as_deref(), Some("https://file.example.com"));
        assert_eq!(merged.timeout_secs, Some(30));
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = ClientConfig::new("http://localhost:8080/api/");
        assert_eq!(config.endpoint("/products"), "http://localhost:8080/api/products");
        assert_eq!(config.endpoint("cart/items"), "http://localhost:8080/api/cart/items");
    }
}
