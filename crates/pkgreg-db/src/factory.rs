//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use pkgreg_core::Repos;
use pkgreg_core::services::AppCore;

use crate::repositories::SqliteRegistryRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteRegistryRepository::new(pool)))
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, storage_host);
    /// ```
    pub fn build_app_core(pool: SqlitePool, storage_host: impl Into<String>) -> AppCore {
        AppCore::new(Self::build_repos(pool), storage_host)
    }

    /// Create a registry repository from a pool.
    pub fn registry_repository(pool: SqlitePool) -> Arc<SqliteRegistryRepository> {
        Arc::new(SqliteRegistryRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a registry repository using this test database.
    pub fn registry_repository(&self) -> SqliteRegistryRepository {
        SqliteRegistryRepository::new(self.pool.clone())
    }

    /// Build repositories backed by this test database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }
}
