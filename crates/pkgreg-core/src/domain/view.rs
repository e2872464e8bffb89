//! Client-side view models for packages and versions.
//!
//! These mirror what a registry front end holds after loading a package
//! page. Download counters are atomics so overlapping downloads can bump
//! them from concurrent tasks; the counts are optimistic and never confirmed
//! against the server.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use super::listing::PackageDetail;

/// A package as displayed by a client.
#[derive(Debug)]
pub struct PackageView {
    name: String,
    downloads: AtomicI64,
}

impl PackageView {
    pub fn new(name: impl Into<String>, downloads: i64) -> Self {
        Self {
            name: name.into(),
            downloads: AtomicI64::new(downloads),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current download count.
    pub fn downloads(&self) -> i64 {
        self.downloads.load(Ordering::SeqCst)
    }

    /// Bump the download count by one.
    pub fn increment_downloads(&self) {
        self.downloads.fetch_add(1, Ordering::SeqCst);
    }
}

/// A version as displayed by a client, linked to its package.
#[derive(Debug)]
pub struct VersionView {
    package: Arc<PackageView>,
    num: String,
    dl_path: String,
    downloads: AtomicI64,
}

impl VersionView {
    pub fn new(
        package: Arc<PackageView>,
        num: impl Into<String>,
        dl_path: impl Into<String>,
        downloads: i64,
    ) -> Self {
        Self {
            package,
            num: num.into(),
            dl_path: dl_path.into(),
            downloads: AtomicI64::new(downloads),
        }
    }

    /// The owning package.
    pub fn package(&self) -> &Arc<PackageView> {
        &self.package
    }

    pub fn num(&self) -> &str {
        &self.num
    }

    /// Path used to resolve the download URL.
    pub fn dl_path(&self) -> &str {
        &self.dl_path
    }

    pub fn downloads(&self) -> i64 {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn increment_downloads(&self) {
        self.downloads.fetch_add(1, Ordering::SeqCst);
    }
}

/// Build views from a package detail response.
///
/// All versions share one [`PackageView`], so a download of any version
/// is reflected in the package counter seen by the others.
pub fn views_from_detail(detail: &PackageDetail) -> (Arc<PackageView>, Vec<VersionView>) {
    let package = Arc::new(PackageView::new(
        detail.package.name.clone(),
        detail.package.downloads,
    ));
    let versions = detail
        .versions
        .iter()
        .map(|v| VersionView::new(Arc::clone(&package), &v.num, &v.dl_path, v.downloads))
        .collect();
    (package, versions)
}
