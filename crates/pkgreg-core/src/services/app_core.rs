//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. The server adapter
//! receives an `AppCore` instance and uses it to access all functionality.

use crate::ports::Repos;

use super::RegistryService;

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = Repos::new(registry_repo);
/// let core = AppCore::new(repos, "static.pkgreg.local");
///
/// let summary = core.registry().summary().await?;
/// ```
pub struct AppCore {
    registry: RegistryService,
}

impl AppCore {
    /// Create a new `AppCore` serving tarballs from `storage_host`.
    pub fn new(repos: Repos, storage_host: impl Into<String>) -> Self {
        Self {
            registry: RegistryService::new(repos.registry, storage_host),
        }
    }

    /// Access the registry service.
    pub const fn registry(&self) -> &RegistryService {
        &self.registry
    }
}
