//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and repositories (via pkgreg-db) for local commands
//! - Registry HTTP client (via pkgreg-client) for remote commands

use anyhow::Result;
use pkgreg_client::{DefaultRegistryClient, RegistryClientConfig};
use pkgreg_core::RegistryConfig;
use pkgreg_core::paths::database_url;
use pkgreg_core::services::AppCore;
use pkgreg_db::{CoreFactory, setup_database_url};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Storage host and default registry URL.
    pub registry: RegistryConfig,
    /// Database URL; resolved from the environment when `None`.
    pub database_url: Option<String>,
}

impl CliConfig {
    /// Read config from the environment, preferring an explicit registry URL.
    pub fn with_defaults(registry_url: Option<String>) -> Result<Self, CliError> {
        let mut registry = RegistryConfig::from_env()?;
        if let Some(url) = registry_url {
            registry.registry_url = url;
            registry.validate()?;
        }
        Ok(Self {
            registry,
            database_url: None,
        })
    }

    /// Build a registry client for remote commands.
    pub fn registry_client(&self) -> Result<DefaultRegistryClient, CliError> {
        let config = RegistryClientConfig::new().with_base_url(&self.registry.registry_url);
        Ok(DefaultRegistryClient::new(&config)?)
    }
}

/// Fully composed context for commands that work on the local database.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the local registry database.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let db_url = match &config.database_url {
        Some(url) => url.clone(),
        None => database_url()?,
    };
    tracing::debug!(database_url = %db_url, "CLI bootstrap");

    let pool = setup_database_url(&db_url).await?;
    Ok(CliContext {
        app: CoreFactory::build_app_core(pool, config.registry.storage_host.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_override_is_validated() {
        let config = CliConfig::with_defaults(Some("https://r.example".to_string())).unwrap();
        assert_eq!(config.registry.registry_url, "https://r.example");

        let err = CliConfig::with_defaults(Some("r.example".to_string())).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_registry_client_uses_configured_url() {
        let config = CliConfig::with_defaults(Some("http://127.0.0.1:9999".to_string())).unwrap();
        let client = config.registry_client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9999/");
    }
}
