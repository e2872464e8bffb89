//! CLI-specific error types and mappings.
//!
//! Maps core and client errors to exit codes and user-facing messages.

use pkgreg_client::ClientError;
use pkgreg_core::{CoreError, ResolveError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested package or version does not exist.
    #[error("{0}")]
    NotFound(String),

    /// No subcommand was given.
    #[error("no command given")]
    MissingCommand,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// The registry could not be reached or answered with an error.
    #[error("Registry error: {0}")]
    Registry(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) | Self::NotFound(_) => 1,
            Self::Arguments(_) | Self::MissingCommand => 2, // EX_USAGE
            Self::Registry(_) => 69,                         // EX_UNAVAILABLE
            Self::Config(_) => 78,                           // EX_CONFIG
            Self::Database(_) => 73,                         // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Resolve(e) => e.into(),
            CoreError::Validation(msg) | CoreError::Conflict(msg) => Self::Arguments(msg),
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Configuration(msg) => Self::Config(msg),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        Self::Registry(err.to_string())
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ApiRequestFailed {
                status: 404,
                message: Some(message),
                ..
            } => Self::NotFound(message),
            ClientError::ApiRequestFailed {
                status: 400,
                message: Some(message),
                ..
            } => Self::Arguments(message),
            ClientError::InvalidUrl(e) => Self::Config(e.to_string()),
            other => Self::Registry(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments(String::new()).exit_code(), 2);
        assert_eq!(CliError::Registry(String::new()).exit_code(), 69);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
        assert_eq!(CliError::Database(String::new()).exit_code(), 73);
        assert_eq!(CliError::MissingCommand.exit_code(), 2);
    }

    #[test]
    fn test_core_error_mapping() {
        let err: CliError = CoreError::Conflict("taken".into()).into();
        assert!(matches!(err, CliError::Arguments(ref m) if m == "taken"));

        let err: CliError = CoreError::NotFound("gone".into()).into();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_client_error_mapping() {
        let err: CliError = ClientError::ApiRequestFailed {
            status: 404,
            url: "http://x/api/v1/packages/foo".into(),
            message: Some("Not found: Package 'foo'".into()),
        }
        .into();
        assert!(matches!(err, CliError::NotFound(_)));

        let err: CliError = ClientError::ApiRequestFailed {
            status: 500,
            url: "http://x".into(),
            message: None,
        }
        .into();
        assert!(matches!(err, CliError::Registry(_)));
    }
}
