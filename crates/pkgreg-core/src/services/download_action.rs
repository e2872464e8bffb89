//! Download action - resolve a version's download URL and start the transfer.
//!
//! The action asks the registry for the file location of a version, bumps
//! the client-side download counters, and points the download frame at the
//! returned URL. Counting on the client is optimistic: the server counts the
//! download itself while answering the resolve request.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::VersionView;
use crate::ports::{DownloadFrame, DownloadUrlSource, ResolveError};

/// Shared "request in flight" flag observed by the UI.
///
/// Overlapping downloads share one flag; whichever settles last decides the
/// final value.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the flag until the returned guard is dropped.
    fn engage(&self) -> LoadingGuard<'_> {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(&self.0)
    }
}

/// Clears the loading flag when the request settles, however it settles.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The download action of a package page.
pub struct DownloadAction {
    source: Arc<dyn DownloadUrlSource>,
    frame: Arc<dyn DownloadFrame>,
    loading: LoadingFlag,
}

impl DownloadAction {
    /// Create an action resolving through `source` and navigating `frame`.
    pub fn new(source: Arc<dyn DownloadUrlSource>, frame: Arc<dyn DownloadFrame>) -> Self {
        Self {
            source,
            frame,
            loading: LoadingFlag::new(),
        }
    }

    /// Whether a download request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    /// A handle to the loading flag for UI bindings.
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Download `version`.
    ///
    /// On success the package and version counters are each bumped by one and
    /// the frame is navigated to the resolved URL, which is also returned.
    /// On failure nothing but the loading flag changes; the error is returned
    /// for the caller to ignore or report.
    pub async fn download(&self, version: &VersionView) -> Result<String, ResolveError> {
        let _loading = self.loading.engage();

        let resolved = match self.source.resolve(version.dl_path()).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(
                    package = %version.package().name(),
                    version = %version.num(),
                    dl_path = %version.dl_path(),
                    error = %e,
                    "Download resolution failed"
                );
                return Err(e);
            }
        };

        version.package().increment_downloads();
        version.increment_downloads();
        self.frame.navigate(&resolved.url);

        tracing::debug!(
            package = %version.package().name(),
            version = %version.num(),
            url = %resolved.url,
            "Download started"
        );
        Ok(resolved.url)
    }
}
