//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::multipart::Boundary;
use crate::root::Root;

/// Host serving JSON API endpoints.
pub const DEFAULT_API_HOST: &str = "api.dropbox.com";
/// Host serving file contents and thumbnails.
pub const DEFAULT_CONTENT_HOST: &str = "api-content.dropbox.com";
/// REST API version segment.
pub const DEFAULT_API_VERSION: u32 = 1;

/// Settings for a [`DropboxClient`](crate::DropboxClient).
///
/// Every field has a default, so a partial config deserializes cleanly:
///
/// ```
/// use dropboxlib::{ClientConfig, Root};
///
/// let config: ClientConfig = serde_json::from_str(r#"{"root": "dropbox"}"#).unwrap();
/// assert_eq!(config.root, Root::Dropbox);
/// assert_eq!(config.api_host, "api.dropbox.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root used when a call passes no override
    pub root: Root,
    /// Host for JSON endpoints
    pub api_host: String,
    /// Host for file contents
    pub content_host: String,
    /// API version segment
    pub api_version: u32,
    /// Multipart boundary strategy for uploads
    pub boundary: Boundary,
}

impl ClientConfig {
    /// Default configuration with the given root.
    pub fn new(root: Root) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    /// Base URL for JSON endpoints, e.g. `https://api.dropbox.com/1`.
    pub fn api_base(&self) -> String {
        format!("https://{}/{}", self.api_host, self.api_version)
    }

    /// Base URL for content endpoints.
    pub fn content_base(&self) -> String {
        format!("https://{}/{}", self.content_host, self.api_version)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root: Root::default(),
            api_host: DEFAULT_API_HOST.to_string(),
            content_host: DEFAULT_CONTENT_HOST.to_string(),
            api_version: DEFAULT_API_VERSION,
            boundary: Boundary::default(),
        }
    }
}
