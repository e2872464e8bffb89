//! Serve command handler.

use pkgreg_axum::{CorsConfig, ServerConfig, start_server};

use crate::bootstrap::CliConfig;
use crate::error::CliError;

/// Build the server configuration for `pkgreg serve`.
pub fn server_config(config: &CliConfig, port: u16, allow_origins: Vec<String>) -> ServerConfig {
    let server = ServerConfig {
        port,
        storage_host: config.registry.storage_host.clone(),
        database_url: config.database_url.clone(),
        cors: CorsConfig::default(),
    };
    if allow_origins.is_empty() {
        server
    } else {
        server.with_allowed_origins(allow_origins)
    }
}

/// Execute the serve command.
///
/// Runs the registry server until the process is stopped.
pub async fn execute(
    config: &CliConfig,
    port: u16,
    allow_origins: Vec<String>,
) -> Result<(), CliError> {
    start_server(server_config(config, port, allow_origins))
        .await
        .map_err(|e| CliError::Core(format!("{e:#}")))
}
