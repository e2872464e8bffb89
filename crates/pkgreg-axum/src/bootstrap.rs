//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::Result;
use pkgreg_core::paths::{data_root, database_url};
use pkgreg_core::services::AppCore;
use pkgreg_core::{DEFAULT_PORT, RegistryConfig, Repos};
use pkgreg_db::{CoreFactory, setup_database_url};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Host serving package tarballs.
    pub storage_host: String,
    /// Database URL; resolved from the environment when `None`.
    pub database_url: Option<String>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config from the environment with default port and CORS.
    pub fn with_defaults() -> Result<Self> {
        let registry = RegistryConfig::from_env()?;
        Ok(Self {
            port: DEFAULT_PORT,
            storage_host: registry.storage_host,
            database_url: None,
            cors: CorsConfig::default(),
        })
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Use an explicit database URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Build a context from already constructed repositories.
    pub fn from_repos(repos: Repos, storage_host: impl Into<String>) -> Self {
        Self {
            core: Arc::new(AppCore::new(repos, storage_host)),
        }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_url = match &config.database_url {
        Some(url) => url.clone(),
        None => database_url()?,
    };

    tracing::info!(
        target: "pkgreg.paths",
        database_url = %db_url,
        data_root = %data_root()?.display(),
        storage_host = %config.storage_host,
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database_url(&db_url).await?;
    let repos = CoreFactory::build_repos(pool);

    Ok(AxumContext::from_repos(repos, config.storage_host.clone()))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("pkgreg registry listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
