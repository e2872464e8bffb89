//! Registry configuration types.
//!
//! Pure configuration values read from the environment with defaults.
//! Adapters decide when to load `.env` before calling [`RegistryConfig::from_env`].

use std::env;

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// Default port of the registry HTTP server.
pub const DEFAULT_PORT: u16 = 8888;

/// Default host serving package tarballs.
pub const DEFAULT_STORAGE_HOST: &str = "static.pkgreg.local";

/// Default base URL clients talk to.
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8888";

/// Environment variable for the storage host.
pub const STORAGE_HOST_ENV: &str = "PKGREG_STORAGE_HOST";

/// Environment variable for the client base URL.
pub const REGISTRY_URL_ENV: &str = "PKGREG_REGISTRY_URL";

/// Registry-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Host serving tarballs; download redirects point here.
    pub storage_host: String,
    /// Base URL of the registry API for client commands.
    pub registry_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            storage_host: DEFAULT_STORAGE_HOST.to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            storage_host: non_empty(lookup(STORAGE_HOST_ENV)).unwrap_or(defaults.storage_host),
            registry_url: non_empty(lookup(REGISTRY_URL_ENV)).unwrap_or(defaults.registry_url),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_host.contains('/') || self.storage_host.contains(char::is_whitespace) {
            return Err(CoreError::Configuration(format!(
                "{STORAGE_HOST_ENV} must be a bare host name, got `{}`",
                self.storage_host
            )));
        }
        if !(self.registry_url.starts_with("http://") || self.registry_url.starts_with("https://"))
        {
            return Err(CoreError::Configuration(format!(
                "{REGISTRY_URL_ENV} must be an http(s) URL, got `{}`",
                self.registry_url
            )));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RegistryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = RegistryConfig::from_lookup(lookup(&[
            (STORAGE_HOST_ENV, "cdn.example.org"),
            (REGISTRY_URL_ENV, "  "),
        ]))
        .unwrap();
        assert_eq!(config.storage_host, "cdn.example.org");
        assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = RegistryConfig::from_lookup(lookup(&[(STORAGE_HOST_ENV, "https://cdn/x")]));
        assert!(matches!(err, Err(CoreError::Configuration(_))));

        let err = RegistryConfig::from_lookup(lookup(&[(REGISTRY_URL_ENV, "ftp://x")]));
        assert!(matches!(err, Err(CoreError::Configuration(_))));
    }
}
