//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx`, `reqwest` or `axum` types in any signature
//! - Repository traits are storage-focused; rules live in services
//! - UI collaborators (the download frame) are plain synchronous sinks

pub mod download_frame;
pub mod download_source;
pub mod registry_repository;

use std::sync::Arc;
use thiserror::Error;

pub use download_frame::{DOWNLOAD_FRAME_ID, DownloadFrame, RecordingFrame};
pub use download_source::{DownloadUrlSource, ResolveError, ResolvedDownload};
pub use registry_repository::RegistryRepository;

/// Container for all repository trait objects.
///
/// Lives in `pkgreg-core` so services can accept it without depending on
/// `pkgreg-db`.
#[derive(Clone)]
pub struct Repos {
    /// Packages, versions and download counters.
    pub registry: Arc<dyn RegistryRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(registry: Arc<dyn RegistryRepository>) -> Self {
        Self { registry }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Resolving a download failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Validation error (invalid input).
    #[error("{0}")]
    Validation(String),

    /// The requested package or version does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request conflicts with existing registry state.
    #[error("{0}")]
    Conflict(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
