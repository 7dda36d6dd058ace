//! # dropboxlib
//!
//! Rust client library for the Dropbox REST API (v1).
//!
//! ## Features
//!
//! - **Account**: fetch account information.
//! - **File Transfers**:
//!   - Download file contents (`get_file`).
//!   - Upload from a local path, an open stream or an in-memory buffer (`put_file`).
//! - **File Operations**: copy, move, delete and create folders.
//! - **Metadata & Sharing**: file/folder metadata, shareable links and thumbnails.
//!
//! Every path-based operation takes an optional [`Root`]. `None` uses the
//! root the client was created with; `Some(root)` overrides it for that call
//! only. Paths are sent as given with leading slashes removed.
//!
//! Requests go through a [`Transport`], which owns signing, credentials and
//! network I/O. [`HttpTransport`] is a reqwest implementation that sends an
//! OAuth 2 bearer token; bring your own for anything else.
//!
//! JSON responses are returned as [`serde_json::Value`] without any schema
//! checks. Nothing is cached and nothing is retried.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use dropboxlib::{DropboxClient, HttpTransport, MetadataOptions, Root, UploadSource};
//!
//! # async fn example() -> dropboxlib::Result<()> {
//! let transport = HttpTransport::new().with_access_token("ACCESS_TOKEN");
//! let client = DropboxClient::new(transport, Root::Dropbox);
//!
//! let info = client.account_info().await?;
//! println!("Linked to {}", info["display_name"]);
//!
//! // List the root folder of the app sandbox instead of the full Dropbox
//! let listing = client
//!     .metadata("/", &MetadataOptions::default(), Some(Root::Sandbox))
//!     .await?;
//! println!("{}", listing);
//!
//! // Upload a local file as /Documents/report.pdf
//! client
//!     .put_file("/Documents/report.pdf", UploadSource::from_path("draft.pdf"), None)
//!     .await?;
//!
//! let data = client.get_file("/Documents/report.pdf", None).await?;
//! println!("{} bytes", data.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod multipart;
pub mod ops;
pub mod root;
pub mod upload;

mod path;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use api::{DropboxClient, FetchRequest, Method, Params, Transport};
pub use config::ClientConfig;
pub use error::{DropboxError, Result, TransportError};
pub use http::HttpTransport;
pub use multipart::{Boundary, MultipartBody};
pub use ops::{MetadataOptions, ThumbnailSize};
pub use root::Root;
pub use upload::UploadSource;
