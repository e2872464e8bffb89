//! Download command handler.
//!
//! Resolves the download URL through the registry, which counts the
//! download, then opens the URL in the system browser.

use std::sync::Arc;

use pkgreg_core::{DownloadAction, DownloadFrame, RecordingFrame, views_from_detail};

use crate::bootstrap::CliConfig;
use crate::error::CliError;
use crate::frame::BrowserFrame;

/// Execute the download command.
pub async fn execute(
    config: &CliConfig,
    package: &str,
    version: &str,
    print_only: bool,
) -> Result<(), CliError> {
    let client = config.registry_client()?;
    let detail = client.package(package).await?;
    let (package_view, versions) = views_from_detail(&detail);

    let view = versions
        .into_iter()
        .find(|v| v.num() == version)
        .ok_or_else(|| CliError::NotFound(format!("{package} has no version {version}")))?;

    let frame: Arc<dyn DownloadFrame> = if print_only {
        Arc::new(RecordingFrame::new())
    } else {
        Arc::new(BrowserFrame)
    };

    let action = DownloadAction::new(Arc::new(client), frame);
    let url = action.download(&view).await?;

    println!("{url}");
    tracing::info!(
        package = %package_view.name(),
        version = %view.num(),
        package_downloads = package_view.downloads(),
        version_downloads = view.downloads(),
        "Download resolved"
    );
    Ok(())
}
