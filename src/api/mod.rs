//! Dropbox API client and transport types.

pub mod client;
pub mod transport;

pub use client::DropboxClient;
pub use transport::{FetchRequest, Method, Params, Transport};
