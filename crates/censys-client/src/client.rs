//! Main Censys API client implementation.

use crate::api::{ExportApi, SearchApi};
use crate::config::ApiConfig;
use censys_core::{CensysError, Credentials, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};
use url::Url;

/// Main Censys API client
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct CensysClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    config: ApiConfig,
}

impl CensysClient {
    /// Create a client for the public Censys API with default settings
    pub fn new() -> Result<Self> {
        CensysClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> CensysClientBuilder {
        CensysClientBuilder::new()
    }

    /// Endpoint configuration of this client
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Access search endpoints with the given credentials
    #[must_use]
    pub fn search<'a>(&'a self, credentials: &'a Credentials) -> SearchApi<'a> {
        SearchApi::new(self, credentials)
    }

    /// Access export endpoints with the given credentials
    #[must_use]
    pub fn export<'a>(&'a self, credentials: &'a Credentials) -> ExportApi<'a> {
        ExportApi::new(self, credentials)
    }

    /// Send an authenticated POST and return the raw body of a 200 response
    ///
    /// The body is sent as-is with `Content-Type: application/json`. Any
    /// status other than 200 is returned as [`CensysError::Http`] carrying the
    /// URL and the request body; the response body is not read in that case.
    #[instrument(skip(self, credentials, body))]
    pub async fn request(
        &self,
        credentials: &Credentials,
        url: &str,
        body: impl Into<String>,
    ) -> Result<Vec<u8>> {
        let body = body.into();
        let target = Url::parse(url).map_err(|e| CensysError::Transport(format!("{url}: {e}")))?;
        debug!(url = %target, "POST request");

        let response = self
            .inner
            .http
            .post(target)
            .basic_auth(&credentials.username, Some(&credentials.secret))
            .header(CONTENT_TYPE, "application/json")
            .body(body.clone())
            .send()
            .await
            .map_err(|e| CensysError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "request rejected");
            return Err(CensysError::Http {
                code: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CensysError::Transport(e.to_string()))?;
        trace!(len = bytes.len(), "response received");
        Ok(bytes.to_vec())
    }

    /// Serialize `body` as JSON and POST it, returning the raw response body
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        credentials: &Credentials,
        url: &str,
        body: &B,
    ) -> Result<Vec<u8>> {
        let payload = serde_json::to_string(body)?;
        self.request(credentials, url, payload).await
    }

    /// POST a JSON body and decode the response into `T`
    pub(crate) async fn post_decode<T: DeserializeOwned, B: Serialize>(
        &self,
        credentials: &Credentials,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let raw = self.post_json(credentials, url, body).await?;
        decode(&raw)
    }
}

/// Decode a response body, rejecting bodies that do not match the schema
pub(crate) fn decode<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    serde_json::from_slice(raw).map_err(CensysError::Decode)
}

/// Builder for configuring a [`CensysClient`]
pub struct CensysClientBuilder {
    config: ApiConfig,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for CensysClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CensysClientBuilder {
    /// Create a builder with the default endpoints and no timeout
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            timeout: None,
            user_agent: format!("censys-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Set the search path segment
    #[must_use]
    pub fn search_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.search_path(path);
        self
    }

    /// Set the export path segment
    #[must_use]
    pub fn export_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.export_path(path);
        self
    }

    /// Replace the whole endpoint configuration
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Bound every request by a timeout; requests are unbounded by default
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CensysClient> {
        let mut http = HttpClient::builder().user_agent(&self.user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| CensysError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(CensysClient {
            inner: Arc::new(ClientInner {
                http,
                config: self.config,
            }),
        })
    }
}
