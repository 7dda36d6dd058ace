//! reqwest-backed transport.
//!
//! Sends requests as shaped by the client, optionally with an OAuth 2
//! bearer token. It does not sign requests and never retries.

use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use crate::api::transport::{FetchRequest, Method, Params, Transport};
use crate::error::TransportError;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP transport for Dropbox API requests.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    access_token: Option<String>,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a new HTTP transport with a proxy.
    pub fn with_proxy(proxy: &str) -> Result<Self, TransportError> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| TransportError::Custom(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| TransportError::Custom(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn build(&self, request: FetchRequest) -> reqwest::RequestBuilder {
        let FetchRequest {
            uri,
            params,
            method,
            headers,
        } = request;

        let mut builder = match (method, params) {
            (Method::Get, Params::None) => self.client.get(uri),
            (Method::Get, Params::Fields(fields)) => self.client.get(uri).query(&fields),
            (Method::Get, Params::Body(body)) => self.client.get(uri).body(body),
            (Method::Post, Params::None) => self.client.post(uri),
            (Method::Post, Params::Fields(fields)) => self.client.post(uri).form(&fields),
            (Method::Post, Params::Body(body)) => self.client.post(uri).body(body),
        };

        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, request: FetchRequest) -> Result<Vec<u8>, TransportError> {
        let response = self.build(request).send().await?;

        if !response.status().is_success() {
            return Err(TransportError::HttpError(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, request: FetchRequest) -> Result<Vec<u8>, TransportError> {
        timeout(self.timeout, self.send(request))
            .await
            .map_err(|_| TransportError::Timeout)?
    }
}
