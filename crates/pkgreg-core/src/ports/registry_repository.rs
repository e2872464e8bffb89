//! Registry repository trait definition.
//!
//! This port defines the interface for package and version persistence,
//! including the download counters. Implementations must handle all storage
//! details internally.

use std::collections::HashMap;

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Package, PackageFilter, PackageOrder, Version};

/// Repository for packages, versions and download counters.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Name validation and paging rules belong in `RegistryService`, not here
/// - `record_download` must bump all three counters or none of them
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    /// List packages matching `filter`, ordered by name.
    async fn list(&self, filter: &PackageFilter) -> Result<Vec<Package>, RepositoryError>;

    /// Count packages whose name starts with `prefix` (all when `None`).
    async fn count(&self, prefix: Option<&str>) -> Result<i64, RepositoryError>;

    /// The first `limit` packages in the given order.
    async fn top(&self, order: PackageOrder, limit: i64) -> Result<Vec<Package>, RepositoryError>;

    /// Get a package by name.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no package has that name.
    async fn get_by_name(&self, name: &str) -> Result<Package, RepositoryError>;

    /// Return the package named `name`, creating it for `user_id` if absent.
    async fn find_or_insert(&self, name: &str, user_id: i64) -> Result<Package, RepositoryError>;

    /// All versions of a package.
    async fn versions(&self, package_id: i64) -> Result<Vec<Version>, RepositoryError>;

    /// Version IDs grouped by package ID, for each of `package_ids`.
    ///
    /// Packages without versions map to an empty list.
    async fn version_ids(
        &self,
        package_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>, RepositoryError>;

    /// Look up a single version of a package.
    async fn find_version(
        &self,
        package_id: i64,
        num: &str,
    ) -> Result<Option<Version>, RepositoryError>;

    /// Insert a new version and touch the package's `updated_at`.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` for a duplicate number.
    async fn insert_version(&self, package_id: i64, num: &str) -> Result<Version, RepositoryError>;

    /// Total downloads across the registry.
    async fn total_downloads(&self) -> Result<i64, RepositoryError>;

    /// Count one download of `name` at version `num`.
    ///
    /// Bumps the package, version and registry-wide counters together.
    /// Returns `Err(RepositoryError::NotFound)` if the pair does not exist.
    async fn record_download(&self, name: &str, num: &str) -> Result<(), RepositoryError>;
}
