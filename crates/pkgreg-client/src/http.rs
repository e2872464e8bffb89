//! HTTP backend abstraction for the registry API.
//!
//! A trait-based backend keeps the client testable without a server. The
//! production implementation uses reqwest and never retries: a failed
//! request is reported once and left to the caller.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::RegistryClientConfig;
use crate::error::{ClientError, ClientResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url` with `Accept: application/json` and decode the body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Error body returned by the registry server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &RegistryClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(ClientError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// A fake HTTP backend that returns canned JSON keyed by URL path.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: HashMap<String, Result<serde_json::Value, u16>>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer GETs of `path` with `json`.
        pub fn with_json(mut self, path: &str, json: serde_json::Value) -> Self {
            self.responses.insert(path.to_string(), Ok(json));
            self
        }

        /// Answer GETs of `path` with an error status.
        pub fn with_status(mut self, path: &str, status: u16) -> Self {
            self.responses.insert(path.to_string(), Err(status));
            self
        }

        /// Full URLs requested so far.
        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T> {
            self.requested.lock().unwrap().push(url.to_string());
            match self.responses.get(url.path()) {
                Some(Ok(json)) => {
                    serde_json::from_value(json.clone()).map_err(|e| {
                        ClientError::InvalidResponse {
                            message: e.to_string(),
                        }
                    })
                }
                Some(Err(status)) => Err(ClientError::ApiRequestFailed {
                    status: *status,
                    url: url.to_string(),
                    message: None,
                }),
                None => Err(ClientError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                    message: None,
                }),
            }
        }
    }
}
