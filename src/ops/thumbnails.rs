//! Thumbnail operations.

use crate::api::{DropboxClient, FetchRequest, Params, Transport};
use crate::error::Result;
use crate::path::resource_path;
use crate::root::Root;

/// Thumbnail size accepted by the thumbnails endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailSize {
    /// 32x32
    Small,
    /// 64x64
    Medium,
    /// 128x128
    #[default]
    Large,
}

impl ThumbnailSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailSize::Small => "small",
            ThumbnailSize::Medium => "medium",
            ThumbnailSize::Large => "large",
        }
    }
}

impl<T: Transport> DropboxClient<T> {
    /// Fetch a thumbnail for an image file.
    ///
    /// # Returns
    /// Image bytes exactly as served
    pub async fn thumbnail(
        &self,
        path: &str,
        size: ThumbnailSize,
        root: Option<Root>,
    ) -> Result<Vec<u8>> {
        let (root, path) = self.resolve(root, path);
        let uri = self.content_url(&resource_path("thumbnails", root, path));
        let params = Params::fields([("size", size.as_str())]);
        self.fetch_raw(FetchRequest::get(uri).with_params(params))
            .await
    }
}
