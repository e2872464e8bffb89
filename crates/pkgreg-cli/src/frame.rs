//! Download frame that hands the URL to the platform opener.

use pkgreg_core::DownloadFrame;

/// Opens resolved download URLs with the system's default handler.
#[derive(Debug, Default)]
pub struct BrowserFrame;

impl DownloadFrame for BrowserFrame {
    fn navigate(&self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!(%url, error = %e, "Failed to open download URL");
        }
    }
}
