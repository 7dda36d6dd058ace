//! Dropbox API client with request dispatch.

use serde_json::Value;
use tracing::{debug, warn};

use crate::api::transport::{FetchRequest, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::multipart::Boundary;
use crate::path::canonical_path;
use crate::root::Root;

/// Dropbox API client.
///
/// Holds the transport and the default root. Nothing changes after
/// construction, so one client can serve concurrent calls as long as the
/// transport allows it.
#[derive(Debug)]
pub struct DropboxClient<T> {
    transport: T,
    root: Root,
    api_base: String,
    content_base: String,
    boundary: Boundary,
}

impl<T: Transport> DropboxClient<T> {
    /// Create a client that talks to the public Dropbox hosts.
    ///
    /// # Arguments
    /// * `transport` - Authenticated fetch capability
    /// * `root` - Root used by calls that pass no override
    pub fn new(transport: T, root: Root) -> Self {
        Self::with_config(transport, ClientConfig::new(root))
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            root: config.root,
            api_base: config.api_base(),
            content_base: config.content_base(),
            boundary: config.boundary,
        }
    }

    /// The default root.
    pub fn root(&self) -> Root {
        self.root
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve the effective root and the canonical form of `path`.
    pub fn resolve<'a>(&self, root: Option<Root>, path: &'a str) -> (Root, &'a str) {
        (Root::resolve(root, self.root), canonical_path(path))
    }

    pub(crate) fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub(crate) fn api_url(&self, resource: &str) -> String {
        format!("{}/{}", self.api_base, resource)
    }

    pub(crate) fn content_url(&self, resource: &str) -> String {
        format!("{}/{}", self.content_base, resource)
    }

    /// Send one request and return the raw response body.
    pub(crate) async fn fetch_raw(&self, request: FetchRequest) -> Result<Vec<u8>> {
        debug!(
            method = %request.method,
            uri = %request.uri,
            body_len = request.params.body_len(),
            "dispatching request"
        );
        let uri = request.uri.clone();

        match self.transport.fetch(request).await {
            Ok(body) => {
                debug!(uri = %uri, bytes = body.len(), "response received");
                Ok(body)
            }
            Err(e) => {
                warn!(uri = %uri, error = %e, "transport failed");
                Err(e.into())
            }
        }
    }

    /// Send one request and decode the response as JSON.
    pub(crate) async fn fetch_json(&self, request: FetchRequest) -> Result<Value> {
        let body = self.fetch_raw(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
