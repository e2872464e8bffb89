//! Registry client for package metadata and download resolution.

use pkgreg_core::contracts::http::registry::{PACKAGES_PATH, SUMMARY_PATH, package_path};
use pkgreg_core::{IndexQuery, PackageDetail, PackagePage, RegistrySummary};
use url::Url;

use crate::config::RegistryClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};

/// Default registry client using the reqwest HTTP backend.
pub type DefaultRegistryClient = RegistryClient<ReqwestBackend>;

/// Client for the registry's JSON API.
///
/// Generic over the HTTP backend so tests can swap in a fake. Use
/// [`DefaultRegistryClient`] in production code.
pub struct RegistryClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultRegistryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &RegistryClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> RegistryClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an absolute server path against the base URL.
    ///
    /// Any path prefix of the base URL is kept.
    pub(crate) fn url_for(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", self.base_url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    /// Fetch a package and its versions.
    pub async fn package(&self, name: &str) -> ClientResult<PackageDetail> {
        self.backend.get_json(&self.url_for(&package_path(name))).await
    }

    /// Fetch one page of the package index.
    pub async fn packages(&self, query: &IndexQuery) -> ClientResult<PackagePage> {
        let mut url = self.url_for(PACKAGES_PATH);
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(page) = query.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(per_page) = query.per_page {
                pairs.append_pair("per_page", &per_page.to_string());
            }
            if let Some(letter) = &query.letter {
                pairs.append_pair("letter", letter);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        self.backend.get_json(&url).await
    }

    /// Fetch registry statistics.
    pub async fn summary(&self) -> ClientResult<RegistrySummary> {
        self.backend.get_json(&self.url_for(SUMMARY_PATH)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn client(backend: FakeBackend) -> RegistryClient<FakeBackend> {
        RegistryClient::with_backend(Url::parse("http://registry.test/").unwrap(), backend)
    }

    fn package_json(name: &str) -> serde_json::Value {
        json!({
            "id": name,
            "name": name,
            "versions": [1],
            "updated_at": "2024-01-01T00:00:00+00:00",
            "created_at": "2024-01-01T00:00:00+00:00",
            "downloads": 7
        })
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultRegistryClient::new(&RegistryClientConfig::new()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8888/");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = RegistryClientConfig::new().with_base_url("not a url");
        assert!(matches!(
            DefaultRegistryClient::new(&config),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_url_for_keeps_base_prefix() {
        let client = RegistryClient::with_backend(
            Url::parse("https://example.org/registry/").unwrap(),
            FakeBackend::new(),
        );
        assert_eq!(
            client.url_for("/download/foo/foo-1.0.0.tar.gz").as_str(),
            "https://example.org/registry/download/foo/foo-1.0.0.tar.gz"
        );
    }

    #[tokio::test]
    async fn test_package_detail() {
        let client = client(FakeBackend::new().with_json(
            "/api/v1/packages/foo",
            json!({
                "package": package_json("foo"),
                "versions": [{
                    "id": 1,
                    "pkg": "foo",
                    "num": "1.0.0",
                    "dl_path": "/download/foo/foo-1.0.0.tar.gz",
                    "updated_at": "2024-01-01T00:00:00+00:00",
                    "created_at": "2024-01-01T00:00:00+00:00",
                    "downloads": 7
                }]
            }),
        ));

        let detail = client.package("foo").await.unwrap();
        assert_eq!(detail.package.downloads, 7);
        assert_eq!(detail.versions[0].dl_path, "/download/foo/foo-1.0.0.tar.gz");
    }

    #[tokio::test]
    async fn test_packages_sends_query() {
        let backend = FakeBackend::new().with_json(
            "/api/v1/packages",
            json!({ "packages": [package_json("foo")], "meta": { "total": 1 } }),
        );
        let client = client(backend);

        let page = client
            .packages(&IndexQuery {
                page: Some(2),
                per_page: None,
                letter: Some("f".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(page.meta.total, 1);
        assert_eq!(
            client.backend.requested(),
            ["http://registry.test/api/v1/packages?page=2&letter=f"]
        );

        client.packages(&IndexQuery::default()).await.unwrap();
        assert_eq!(
            client.backend.requested()[1],
            "http://registry.test/api/v1/packages"
        );
    }

    #[tokio::test]
    async fn test_summary_error_status() {
        let client = client(FakeBackend::new().with_status("/api/v1/summary", 500));
        let err = client.summary().await.unwrap_err();
        assert!(matches!(err, ClientError::ApiRequestFailed { status: 500, .. }));
    }
}
