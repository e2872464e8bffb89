//! Listing, paging and summary types for registry queries.

use serde::{Deserialize, Serialize};

use super::package::EncodablePackage;
use super::version::EncodableVersion;

/// Default page size for package listings.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: i64 = 100;

/// Number of packages in each summary list.
pub const SUMMARY_LIST_SIZE: i64 = 10;

/// Query parameters for the package index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexQuery {
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size; at most [`MAX_PER_PAGE`].
    pub per_page: Option<i64>,
    /// Only list packages whose name starts with this letter.
    pub letter: Option<String>,
}

impl IndexQuery {
    /// Effective page number.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    /// Effective page size.
    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Lower-cased first letter of the `letter` filter, if any.
    pub fn name_prefix(&self) -> Option<String> {
        self.letter
            .as_deref()
            .and_then(|l| l.chars().next())
            .map(|c| c.to_lowercase().collect())
    }
}

/// Storage-level filter derived from an [`IndexQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFilter {
    pub prefix: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Sort orders for the summary lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageOrder {
    /// Most recently created first.
    Newest,
    /// Most downloaded first.
    MostDownloaded,
    /// Most recently updated first.
    RecentlyUpdated,
}

/// Paging metadata of an index response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Number of packages matching the filter across all pages.
    pub total: i64,
}

/// One page of the package index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagePage {
    pub packages: Vec<EncodablePackage>,
    pub meta: PageMeta,
}

/// Front-page statistics of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub num_downloads: i64,
    pub num_packages: i64,
    pub new_packages: Vec<EncodablePackage>,
    pub most_downloaded: Vec<EncodablePackage>,
    pub just_updated: Vec<EncodablePackage>,
}

/// A package together with all of its versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetail {
    pub package: EncodablePackage,
    pub versions: Vec<EncodableVersion>,
}
