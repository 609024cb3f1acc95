//! HTTP client
//!
//! Resolves endpoint paths against the server's REST root, applies default
//! headers and authentication, and dispatches through the transport.

use super::transport::{RawResponse, ReqwestTransport, Transport};
use crate::auth::{Authenticator, NoAuth};
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Path segments of the REST API root, relative to the server URL
pub const API_ROOT: [&str; 3] = ["rest", "api", "1.0"];

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Server URL (may include a context path, e.g. `https://host/bitbucket`)
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("stashpull/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client bound to one server
///
/// Cloning is cheap; clones share the transport, the authenticator and the
/// connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<HttpClientConfig>,
    base_url: Url,
    transport: Arc<dyn Transport>,
    authenticator: Arc<dyn Authenticator>,
}

impl HttpClient {
    /// Create an unauthenticated client for the given server URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(HttpClientConfig::builder().base_url(base_url).build())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let raw = config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::missing_field("base_url"))?;
        let base_url = Url::parse(raw)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_value("base_url", format!("{raw} cannot be a base URL")));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            transport: Arc::new(ReqwestTransport::new(client.clone())),
            client,
            config: Arc::new(config),
            base_url,
            authenticator: Arc::new(NoAuth),
        })
    }

    /// Set the authenticator
    #[must_use]
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Replace the transport
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Server URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of an endpoint below the REST API root
    ///
    /// Segments are percent-encoded individually, so keys and slugs cannot
    /// alter the path structure.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::invalid_value("base_url", "cannot be a base URL"))?
            .pop_if_empty()
            .extend(API_ROOT)
            .extend(segments);
        Ok(url)
    }

    /// Build an authenticated request
    pub fn build_request(&self, method: Method, url: Url, body: Option<Bytes>) -> Result<Request> {
        let mut req = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        self.authenticator.decorate(req).build().map_err(Error::from)
    }

    /// Build, authenticate and dispatch a request
    pub async fn execute(&self, method: Method, url: Url, body: Option<Bytes>) -> Result<RawResponse> {
        let request = self.build_request(method, url, body)?;
        debug!("Dispatching {} {}", request.method(), request.url());
        self.transport.execute(request).await
    }

    /// Make a GET request
    pub async fn get(&self, url: Url) -> Result<RawResponse> {
        self.execute(Method::GET, url, None).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
