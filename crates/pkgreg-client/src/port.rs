//! `DownloadUrlSource` implementation for `RegistryClient`.
//!
//! Converts internal client errors into the core `ResolveError` at the
//! boundary.

use async_trait::async_trait;
use pkgreg_core::{DownloadUrlSource, ResolveError, ResolvedDownload};

use crate::client::RegistryClient;
use crate::error::ClientError;
use crate::http::HttpBackend;

/// Convert an internal `ClientError` to the core `ResolveError`.
fn map_error(err: ClientError, dl_path: &str) -> ResolveError {
    match err {
        ClientError::ApiRequestFailed { status, .. } => ResolveError::Status {
            status,
            path: dl_path.to_string(),
        },
        ClientError::InvalidResponse { message } => ResolveError::InvalidResponse(message),
        ClientError::Network(e) if e.is_decode() => ResolveError::InvalidResponse(e.to_string()),
        ClientError::Network(e) => ResolveError::Network(e.to_string()),
        ClientError::InvalidUrl(e) => ResolveError::Network(e.to_string()),
    }
}

#[async_trait]
impl<B: HttpBackend> DownloadUrlSource for RegistryClient<B> {
    async fn resolve(&self, dl_path: &str) -> Result<ResolvedDownload, ResolveError> {
        let url = self.url_for(dl_path);
        self.backend
            .get_json::<ResolvedDownload>(&url)
            .await
            .map_err(|e| map_error(e, dl_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;
    use url::Url;

    const DL_PATH: &str = "/download/foo/foo-1.0.0.tar.gz";

    fn client(backend: FakeBackend) -> RegistryClient<FakeBackend> {
        RegistryClient::with_backend(Url::parse("http://registry.test").unwrap(), backend)
    }

    #[tokio::test]
    async fn test_resolve_returns_url() {
        let client = client(FakeBackend::new().with_json(
            DL_PATH,
            json!({ "ok": true, "url": "https://static.test/pkg/foo/foo-1.0.0.tar.gz" }),
        ));

        let resolved = client.resolve(DL_PATH).await.unwrap();
        assert_eq!(resolved.url, "https://static.test/pkg/foo/foo-1.0.0.tar.gz");
    }

    #[tokio::test]
    async fn test_missing_url_is_invalid_response() {
        let client = client(FakeBackend::new().with_json(DL_PATH, json!({ "ok": true })));

        let err = client.resolve(DL_PATH).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_status_keeps_dl_path() {
        let client = client(FakeBackend::new().with_status(DL_PATH, 404));

        let err = client.resolve(DL_PATH).await.unwrap_err();
        assert_eq!(
            err,
            ResolveError::Status {
                status: 404,
                path: DL_PATH.to_string()
            }
        );
    }
}
