//! Port for resolving a version's download path into a file URL.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Body returned by a download path when asked for JSON.
///
/// Registries may send extra fields (such as `ok`); only `url` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolvedDownload {
    /// Location of the actual file.
    pub url: String,
}

/// Errors from resolving a download path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The registry answered with a non-success status.
    #[error("Download request for {path} failed with status {status}")]
    Status { status: u16, path: String },

    /// The response body was not `{ "url": ... }`.
    #[error("Invalid download response: {0}")]
    InvalidResponse(String),
}

/// Resolves a `dl_path` to the URL of the file to fetch.
///
/// Implementations issue a single request; they do not retry. Counting the
/// download is the server's business and happens as a side effect of the
/// request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DownloadUrlSource: Send + Sync {
    /// Issue `GET <dl_path>` and decode the resolved URL.
    async fn resolve(&self, dl_path: &str) -> Result<ResolvedDownload, ResolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_download_ignores_extra_fields() {
        let body = r#"{"ok": true, "url": "https://cdn.example/foo-1.0.0.crate"}"#;
        let resolved: ResolvedDownload = serde_json::from_str(body).unwrap();
        assert_eq!(resolved.url, "https://cdn.example/foo-1.0.0.crate");
    }

    #[test]
    fn test_resolved_download_requires_url() {
        let result: Result<ResolvedDownload, _> = serde_json::from_str(r#"{"ok": true}"#);
        assert!(result.is_err());
    }
}
