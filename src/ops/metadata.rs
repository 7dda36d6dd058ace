//! Metadata and sharing-link operations.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::api::{DropboxClient, FetchRequest, Params, Transport};
use crate::error::Result;
use crate::path::resource_path;
use crate::root::Root;

/// Query options for [`DropboxClient::metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataOptions {
    /// Include folder contents
    pub list: bool,
    /// Hash from a previous listing; the server answers 304 if unchanged
    pub hash: Option<String>,
    /// Maximum number of entries in a folder listing
    pub file_limit: Option<u32>,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self {
            list: true,
            hash: None,
            file_limit: None,
        }
    }
}

impl MetadataOptions {
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_file_limit(mut self, file_limit: u32) -> Self {
        self.file_limit = Some(file_limit);
        self
    }

    pub fn without_listing(mut self) -> Self {
        self.list = false;
        self
    }

    fn to_params(&self) -> Params {
        let mut fields = BTreeMap::new();
        fields.insert("list".to_string(), self.list.to_string());
        if let Some(hash) = &self.hash {
            fields.insert("hash".to_string(), hash.clone());
        }
        if let Some(limit) = self.file_limit {
            fields.insert("file_limit".to_string(), limit.to_string());
        }
        Params::Fields(fields)
    }
}

impl<T: Transport> DropboxClient<T> {
    /// Get metadata for a file or folder.
    ///
    /// The options are sent as query parameters.
    pub async fn metadata(
        &self,
        path: &str,
        options: &MetadataOptions,
        root: Option<Root>,
    ) -> Result<Value> {
        let (root, path) = self.resolve(root, path);
        let uri = self.api_url(&resource_path("metadata", root, path));
        self.fetch_json(FetchRequest::get(uri).with_params(options.to_params()))
            .await
    }

    /// Get a shareable link for a file or folder.
    pub async fn links(&self, path: &str, root: Option<Root>) -> Result<Value> {
        let (root, path) = self.resolve(root, path);
        let uri = self.api_url(&resource_path("links", root, path));
        self.fetch_json(FetchRequest::get(uri)).await
    }
}
