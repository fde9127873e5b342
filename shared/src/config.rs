//! Key check configuration
//!
//! The endpoint that is queried and the page opened after a successful check.
//! The front end resolves both at compile time and falls back to
//! [`KeyCheckConfig::default`] when an override does not [`validate`](KeyCheckConfig::validate).

use crate::error::ConfigError;

pub const DEFAULT_KEY_CHECK_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

/// Opened after any accepted key. Unrelated to the key itself.
pub const DEFAULT_REDIRECT_URL: &str = "https://github.com/naman-sonawane/trippy";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyCheckConfig {
    pub endpoint: String,
    pub redirect_url: String,
}

impl Default for KeyCheckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_CHECK_ENDPOINT, DEFAULT_REDIRECT_URL)
    }
}

impl KeyCheckConfig {
    pub fn new(endpoint: impl Into<String>, redirect_url: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            redirect_url: redirect_url.into(),
        }
    }

    /// Build the check URL for `key`, percent-encoding it as the `key` query parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared::config::KeyCheckConfig;
    ///
    /// let config = KeyCheckConfig::new("https://example.com/models", "https://example.com");
    /// assert_eq!(config.check_url("a b&c"), "https://example.com/models?key=a%20b%26c");
    /// ```
    pub fn check_url(&self, key: &str) -> String {
        format!("{}?key={}", self.endpoint, urlencoding::encode(key))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_absolute_http(&self.endpoint) || self.endpoint.contains('?') {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }

        if !is_absolute_http(&self.redirect_url) {
            return Err(ConfigError::InvalidRedirect(self.redirect_url.clone()));
        }

        Ok(())
    }
}

fn is_absolute_http(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = KeyCheckConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.redirect_url, "https://github.com/naman-sonawane/trippy");
    }

    #[test]
    fn test_check_url_appends_key() {
        let config = KeyCheckConfig::default();
        assert_eq!(
            config.check_url("AIzaSyExample_key-1"),
            "https://generativelanguage.googleapis.com/v1beta/models?key=AIzaSyExample_key-1"
        );
    }

    #[test]
    fn test_check_url_encodes_reserved_characters() {
        let config = KeyCheckConfig::default();
        let url = config.check_url("k&alt=media#x");
        assert!(url.ends_with("?key=k%26alt%3Dmedia%23x"));
    }

    #[test]
    fn test_endpoint_with_query_is_rejected() {
        let config = KeyCheckConfig::new("https://example.com/models?alt=json", DEFAULT_REDIRECT_URL);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint("https://example.com/models?alt=json".to_string()))
        );
    }

    #[test]
    fn test_relative_urls_are_rejected() {
        let config = KeyCheckConfig::new("/models", DEFAULT_REDIRECT_URL);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_))));

        let config = KeyCheckConfig::new(DEFAULT_KEY_CHECK_ENDPOINT, "https:///project");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRedirect(_))));

        let config = KeyCheckConfig::new(DEFAULT_KEY_CHECK_ENDPOINT, "ftp://example.com");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRedirect(_))));
    }
}
