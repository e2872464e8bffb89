//! Public configuration for the registry client.

use std::time::Duration;

use pkgreg_core::DEFAULT_REGISTRY_URL;

/// Configuration for the registry client.
///
/// # Example
///
/// ```
/// use pkgreg_client::RegistryClientConfig;
/// use std::time::Duration;
///
/// let config = RegistryClientConfig::new()
///     .with_base_url("https://registry.example.org")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct RegistryClientConfig {
    /// Base URL that `dl_path`s and API routes are resolved against
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Connect timeout
    pub(crate) connect_timeout: Duration,
}

impl Default for RegistryClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            user_agent: concat!("pkgreg-client/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl RegistryClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry base URL.
    ///
    /// Defaults to `http://localhost:8888`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connect timeout of the underlying HTTP client.
    ///
    /// Requests themselves are not timed out.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
