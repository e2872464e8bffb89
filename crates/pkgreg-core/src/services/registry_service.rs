//! Registry service - orchestrates package publishing, listing and downloads.

use std::sync::Arc;

use crate::domain::{
    EncodablePackage, IndexQuery, MAX_PER_PAGE, Package, PackageDetail, PackageFilter,
    PackageOrder, PackagePage, PageMeta, RegistrySummary, SUMMARY_LIST_SIZE, Version,
    storage_path, version_from_filename,
};
use crate::ports::{CoreError, RegistryRepository, RepositoryError};

/// Service for registry operations.
pub struct RegistryService {
    repo: Arc<dyn RegistryRepository>,
    storage_host: String,
}

impl RegistryService {
    /// Create a registry service serving tarballs from `storage_host`.
    pub fn new(repo: Arc<dyn RegistryRepository>, storage_host: impl Into<String>) -> Self {
        Self {
            repo,
            storage_host: storage_host.into(),
        }
    }

    /// Record a new version of a package on behalf of `user_id`.
    ///
    /// The package is created on first publish and belongs to that user from
    /// then on.
    pub async fn publish(
        &self,
        name: &str,
        num: &str,
        user_id: i64,
    ) -> Result<(Package, Version), CoreError> {
        let name = name.to_lowercase();
        if !Package::valid_name(&name) {
            return Err(CoreError::Validation(format!(
                "invalid package name: `{name}`"
            )));
        }
        if !Version::valid(num) {
            return Err(CoreError::Validation(format!(
                "invalid package version: `{num}`"
            )));
        }

        let package = self.repo.find_or_insert(&name, user_id).await?;
        if package.user_id != user_id {
            return Err(CoreError::Conflict(
                "package name has already been claimed by another user".to_string(),
            ));
        }

        if self.repo.find_version(package.id, num).await?.is_some() {
            return Err(already_uploaded(num));
        }
        let version = match self.repo.insert_version(package.id, num).await {
            Ok(version) => version,
            Err(RepositoryError::AlreadyExists(_)) => return Err(already_uploaded(num)),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(package = %name, version = %num, user_id, "Published version");
        let package = self.repo.get_by_name(&name).await?;
        Ok((package, version))
    }

    /// One page of the package index.
    pub async fn index(&self, query: &IndexQuery) -> Result<PackagePage, CoreError> {
        let limit = query.per_page();
        if limit > MAX_PER_PAGE {
            return Err(CoreError::Validation(format!(
                "cannot request more than {MAX_PER_PAGE} packages"
            )));
        }
        if limit < 1 {
            return Err(CoreError::Validation(
                "per_page must be at least 1".to_string(),
            ));
        }
        let page = query.page();
        if page < 1 {
            return Err(CoreError::Validation("page must be at least 1".to_string()));
        }

        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| CoreError::Validation("page is out of range".to_string()))?;

        let filter = PackageFilter {
            prefix: query.name_prefix(),
            limit,
            offset,
        };
        let packages = self.repo.list(&filter).await?;
        let packages = self.encode_many(packages).await?;
        let total = self.repo.count(filter.prefix.as_deref()).await?;

        Ok(PackagePage {
            packages,
            meta: PageMeta { total },
        })
    }

    /// Registry-wide statistics and the front-page package lists.
    pub async fn summary(&self) -> Result<RegistrySummary, CoreError> {
        let num_packages = self.repo.count(None).await?;
        let num_downloads = self.repo.total_downloads().await?;

        Ok(RegistrySummary {
            num_downloads,
            num_packages,
            new_packages: self.top(PackageOrder::Newest).await?,
            most_downloaded: self.top(PackageOrder::MostDownloaded).await?,
            just_updated: self.top(PackageOrder::RecentlyUpdated).await?,
        })
    }

    /// A package and all of its versions.
    pub async fn show(&self, name: &str) -> Result<PackageDetail, CoreError> {
        let package = self.repo.get_by_name(name).await.map_err(not_found)?;
        let versions = self.repo.versions(package.id).await?;

        let version_ids = versions.iter().map(|v| v.id).collect();
        let encoded_versions = versions
            .into_iter()
            .map(|v| v.encodable(&package))
            .collect();

        Ok(PackageDetail {
            package: package.encodable(version_ids),
            versions: encoded_versions,
        })
    }

    /// Count a download of `filename` and return the URL of the tarball.
    ///
    /// `filename` must be `{name}-{version}.tar.gz`.
    pub async fn download(&self, name: &str, filename: &str) -> Result<String, CoreError> {
        let num = version_from_filename(name, filename).ok_or_else(|| {
            CoreError::Validation(
                "download filename is not a tarball with the package name as a prefix"
                    .to_string(),
            )
        })?;

        match self.repo.record_download(name, num).await {
            Ok(()) => {}
            Err(RepositoryError::NotFound(_)) => {
                return Err(CoreError::NotFound(
                    "package or version not found".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(package = %name, version = %num, "Counted download");
        Ok(self.storage_url(name, num))
    }

    /// Public URL of a tarball on the storage host.
    pub fn storage_url(&self, name: &str, num: &str) -> String {
        format!("https://{}{}", self.storage_host, storage_path(name, num))
    }

    async fn top(&self, order: PackageOrder) -> Result<Vec<EncodablePackage>, CoreError> {
        let packages = self.repo.top(order, SUMMARY_LIST_SIZE).await?;
        self.encode_many(packages).await
    }

    async fn encode_many(
        &self,
        packages: Vec<Package>,
    ) -> Result<Vec<EncodablePackage>, CoreError> {
        let ids: Vec<i64> = packages.iter().map(|p| p.id).collect();
        let mut version_ids = self.repo.version_ids(&ids).await?;

        Ok(packages
            .into_iter()
            .map(|p| {
                let versions = version_ids.remove(&p.id).unwrap_or_default();
                p.encodable(versions)
            })
            .collect())
    }
}

fn already_uploaded(num: &str) -> CoreError {
    CoreError::Conflict(format!("package version `{num}` is already uploaded"))
}

fn not_found(err: RepositoryError) -> CoreError {
    match err {
        RepositoryError::NotFound(msg) => CoreError::NotFound(msg),
        other => other.into(),
    }
}
