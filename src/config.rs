//! Public configuration for the HATX client.

use std::time::Duration;

/// Default API version segment inserted between the base URL and endpoint
/// paths.
pub(crate) const DEFAULT_VERSION: &str = "v1";

/// Configuration for the HATX client.
///
/// The base URL is required; everything else has a sensible default and can
/// be customized with the builder methods.
///
/// # Example
///
/// ```
/// use hatx_client::HatxClientConfig;
/// use std::time::Duration;
///
/// let config = HatxClientConfig::new("https://hatx.example.org/api")
///     .with_version("v2")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct HatxClientConfig {
    /// Base URL of the HATX service (host, optionally with a path prefix)
    pub(crate) base_url: String,
    /// API version segment (default: `v1`)
    pub(crate) version: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Extra headers applied to every request
    pub(crate) headers: Vec<(String, String)>,
}

impl HatxClientConfig {
    /// Create a configuration for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: DEFAULT_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("hatx-client/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: Vec::new(),
        }
    }

    /// Set the API version segment.
    ///
    /// Defaults to `v1`. Surrounding slashes are tolerated and stripped when
    /// the base path is computed.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HatxClientConfig::new("https://hatx.example.org/api");
        assert_eq!(config.base_url, "https://hatx.example.org/api");
        assert_eq!(config.version, "v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.contains("hatx-client"));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HatxClientConfig::new("https://hatx.example.org/api")
            .with_version("v2")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent")
            .with_header("X-Lab-Id", "42");

        assert_eq!(config.version, "v2");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(
            config.headers,
            vec![("X-Lab-Id".to_string(), "42".to_string())]
        );
    }
}
