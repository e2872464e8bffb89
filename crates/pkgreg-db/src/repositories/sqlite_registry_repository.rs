//! `SQLite` implementation of the `RegistryRepository` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use pkgreg_core::{
    Package, PackageFilter, PackageOrder, RegistryRepository, RepositoryError, Version,
};

use super::row_mappers::{
    PACKAGE_SELECT_COLUMNS, VERSION_SELECT_COLUMNS, now_timestamp, row_to_package, row_to_version,
};

/// `SQLite` implementation of the `RegistryRepository` trait.
///
/// Download counters live on `packages`, `versions` and the single-row
/// `metadata` table; `record_download` updates them in one transaction.
pub struct SqliteRegistryRepository {
    pool: SqlitePool,
}

impl SqliteRegistryRepository {
    /// Create a new `SQLite` registry repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map `SQLx` errors to `RepositoryError`.
fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        return RepositoryError::AlreadyExists(msg);
    }
    if msg.contains("FOREIGN KEY constraint failed") {
        return RepositoryError::Constraint(msg);
    }
    RepositoryError::Storage(msg)
}

const PREFIX_CLAUSE: &str = "substr(name, 1, length(?)) = ?";

#[async_trait]
impl RegistryRepository for SqliteRegistryRepository {
    async fn list(&self, filter: &PackageFilter) -> Result<Vec<Package>, RepositoryError> {
        let where_clause = if filter.prefix.is_some() {
            format!("WHERE {PREFIX_CLAUSE}")
        } else {
            String::new()
        };
        let sql = format!(
            "SELECT {PACKAGE_SELECT_COLUMNS} FROM packages {where_clause} ORDER BY name ASC LIMIT ? OFFSET ?"
        );

        let mut query = sqlx::query(&sql);
        if let Some(prefix) = &filter.prefix {
            query = query.bind(prefix).bind(prefix);
        }
        let rows = query
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_package).collect()
    }

    async fn count(&self, prefix: Option<&str>) -> Result<i64, RepositoryError> {
        let count = match prefix {
            Some(prefix) => {
                let sql = format!("SELECT COUNT(*) FROM packages WHERE {PREFIX_CLAUSE}");
                sqlx::query_scalar(&sql)
                    .bind(prefix)
                    .bind(prefix)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM packages")
                    .fetch_one(&self.pool)
                    .await
            }
        };
        count.map_err(map_sqlx_error)
    }

    async fn top(&self, order: PackageOrder, limit: i64) -> Result<Vec<Package>, RepositoryError> {
        let order_by = match order {
            PackageOrder::Newest => "created_at DESC",
            PackageOrder::MostDownloaded => "downloads DESC",
            PackageOrder::RecentlyUpdated => "updated_at DESC",
        };
        let sql = format!(
            "SELECT {PACKAGE_SELECT_COLUMNS} FROM packages ORDER BY {order_by}, name ASC LIMIT ?"
        );

        let rows = sqlx::query(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_package).collect()
    }

    async fn get_by_name(&self, name: &str) -> Result<Package, RepositoryError> {
        let sql = format!("SELECT {PACKAGE_SELECT_COLUMNS} FROM packages WHERE name = ?");
        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Package '{name}'")))?;

        row_to_package(&row)
    }

    async fn find_or_insert(&self, name: &str, user_id: i64) -> Result<Package, RepositoryError> {
        let now = now_timestamp();
        let inserted = sqlx::query(
            r#"
            INSERT INTO packages (name, user_id, created_at, updated_at, downloads)
            VALUES (?, ?, ?, ?, 0)
            ON CONFLICT(name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(user_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if inserted.rows_affected() > 0 {
            tracing::debug!(package = %name, user_id, "Created package");
        }
        self.get_by_name(name).await
    }

    async fn versions(&self, package_id: i64) -> Result<Vec<Version>, RepositoryError> {
        let sql = format!(
            "SELECT {VERSION_SELECT_COLUMNS} FROM versions WHERE package_id = ? ORDER BY id ASC"
        );
        let rows = sqlx::query(&sql)
            .bind(package_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_version).collect()
    }

    async fn version_ids(
        &self,
        package_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>, RepositoryError> {
        let mut map: HashMap<i64, Vec<i64>> =
            package_ids.iter().map(|id| (*id, Vec::new())).collect();
        if package_ids.is_empty() {
            return Ok(map);
        }

        let placeholders = vec!["?"; package_ids.len()].join(", ");
        let sql = format!(
            "SELECT id, package_id FROM versions WHERE package_id IN ({placeholders}) ORDER BY id ASC"
        );
        let mut query = sqlx::query(&sql);
        for id in package_ids {
            query = query.bind(id);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx_error)?;

        for row in rows {
            let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
            let package_id: i64 = row.try_get("package_id").map_err(map_sqlx_error)?;
            map.entry(package_id).or_default().push(id);
        }
        Ok(map)
    }

    async fn find_version(
        &self,
        package_id: i64,
        num: &str,
    ) -> Result<Option<Version>, RepositoryError> {
        let sql = format!(
            "SELECT {VERSION_SELECT_COLUMNS} FROM versions WHERE package_id = ? AND num = ?"
        );
        let row = sqlx::query(&sql)
            .bind(package_id)
            .bind(num)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_version).transpose()
    }

    async fn insert_version(&self, package_id: i64, num: &str) -> Result<Version, RepositoryError> {
        let now = now_timestamp();
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(
            r#"
            INSERT INTO versions (package_id, num, created_at, updated_at, downloads)
            VALUES (?, ?, ?, ?, 0)
            "#,
        )
        .bind(package_id)
        .bind(num)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        sqlx::query("UPDATE packages SET updated_at = ? WHERE id = ?")
            .bind(&now)
            .bind(package_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        let id = result.last_insert_rowid();
        let sql = format!("SELECT {VERSION_SELECT_COLUMNS} FROM versions WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        row_to_version(&row)
    }

    async fn total_downloads(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COALESCE(SUM(total_downloads), 0) FROM metadata")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn record_download(&self, name: &str, num: &str) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let updated = sqlx::query(
            r#"
            UPDATE versions SET downloads = downloads + 1
            WHERE num = ? AND package_id = (SELECT id FROM packages WHERE name = ?)
            "#,
        )
        .bind(num)
        .bind(name)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        // Dropping the transaction rolls it back
        if updated.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("{name} {num}")));
        }

        sqlx::query("UPDATE packages SET downloads = downloads + 1 WHERE name = ?")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        sqlx::query("UPDATE metadata SET total_downloads = total_downloads + 1")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDb;

    async fn repo_with(packages: &[(&str, &[&str])]) -> (TestDb, SqliteRegistryRepository) {
        let db = TestDb::new().await.unwrap();
        let repo = db.registry_repository();
        for (name, versions) in packages {
            let package = repo.find_or_insert(name, 1).await.unwrap();
            for num in *versions {
                repo.insert_version(package.id, num).await.unwrap();
            }
        }
        (db, repo)
    }

    #[tokio::test]
    async fn test_find_or_insert_keeps_first_owner() {
        let (_db, repo) = repo_with(&[]).await;

        let first = repo.find_or_insert("foo", 1).await.unwrap();
        let second = repo.find_or_insert("foo", 2).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.user_id, 1);
        assert_eq!(repo.count(None).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_version_rejects_duplicates() {
        let (_db, repo) = repo_with(&[("foo", &["1.0.0"])]).await;
        let package = repo.get_by_name("foo").await.unwrap();

        let err = repo.insert_version(package.id, "1.0.0").await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));

        let found = repo.find_version(package.id, "1.0.0").await.unwrap();
        assert_eq!(found.map(|v| v.num).as_deref(), Some("1.0.0"));
        assert!(repo.find_version(package.id, "2.0.0").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_version_touches_package() {
        let (_db, repo) = repo_with(&[("foo", &[])]).await;
        let before = repo.get_by_name("foo").await.unwrap();

        repo.insert_version(before.id, "0.2.0").await.unwrap();
        let after = repo.get_by_name("foo").await.unwrap();

        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_list_filters_by_prefix_and_pages() {
        let (_db, repo) = repo_with(&[
            ("beta", &[]),
            ("alpha", &[]),
            ("a_b", &[]),
            ("apple", &[]),
            ("ab%", &[]),
        ])
        .await;

        let filter = PackageFilter {
            prefix: Some("a".to_string()),
            limit: 2,
            offset: 1,
        };
        let names: Vec<String> = repo
            .list(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["ab%", "alpha"]);
        assert_eq!(repo.count(Some("a")).await.unwrap(), 4);

        // Wildcards are matched literally
        assert_eq!(repo.count(Some("a_")).await.unwrap(), 1);
        assert_eq!(repo.count(None).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_version_ids_groups_by_package() {
        let (_db, repo) = repo_with(&[("foo", &["1.0.0", "1.1.0"]), ("bar", &[])]).await;
        let foo = repo.get_by_name("foo").await.unwrap();
        let bar = repo.get_by_name("bar").await.unwrap();

        let map = repo.version_ids(&[foo.id, bar.id]).await.unwrap();

        assert_eq!(map[&foo.id].len(), 2);
        assert!(map[&bar.id].is_empty());
        assert!(repo.version_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_download_bumps_all_counters() {
        let (_db, repo) = repo_with(&[("foo", &["1.0.0", "2.0.0"])]).await;

        repo.record_download("foo", "1.0.0").await.unwrap();
        repo.record_download("foo", "2.0.0").await.unwrap();
        repo.record_download("foo", "2.0.0").await.unwrap();

        let package = repo.get_by_name("foo").await.unwrap();
        let versions = repo.versions(package.id).await.unwrap();
        assert_eq!(package.downloads, 3);
        assert_eq!(versions[0].downloads, 1);
        assert_eq!(versions[1].downloads, 2);
        assert_eq!(repo.total_downloads().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_record_download_unknown_changes_nothing() {
        let (_db, repo) = repo_with(&[("foo", &["1.0.0"])]).await;

        let err = repo.record_download("foo", "9.9.9").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
        let err = repo.record_download("nope", "1.0.0").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));

        assert_eq!(repo.get_by_name("foo").await.unwrap().downloads, 0);
        assert_eq!(repo.total_downloads().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_top_orders() {
        let (_db, repo) = repo_with(&[("first", &["1.0.0"]), ("second", &["1.0.0"])]).await;
        repo.record_download("first", "1.0.0").await.unwrap();

        let most = repo.top(PackageOrder::MostDownloaded, 10).await.unwrap();
        assert_eq!(most[0].name, "first");

        let newest = repo.top(PackageOrder::Newest, 1).await.unwrap();
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].name, "second");
    }

    #[tokio::test]
    async fn test_get_by_name_missing() {
        let (_db, repo) = repo_with(&[]).await;
        let err = repo.get_by_name("ghost").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
