//! File operations: copy, move, delete and folder creation.
//!
//! These endpoints take their paths as named parameters rather than as part
//! of the resource path.

use serde_json::Value;

use crate::api::{DropboxClient, FetchRequest, Params, Transport};
use crate::error::Result;
use crate::path::canonical_path;
use crate::root::Root;

impl<T: Transport> DropboxClient<T> {
    /// Copy a file or folder.
    pub async fn file_copy(
        &self,
        from_path: &str,
        to_path: &str,
        root: Option<Root>,
    ) -> Result<Value> {
        let request = self.transfer_request("fileops/copy", from_path, to_path, root);
        self.fetch_json(request).await
    }

    /// Move a file or folder.
    pub async fn file_move(
        &self,
        from_path: &str,
        to_path: &str,
        root: Option<Root>,
    ) -> Result<Value> {
        let request = self.transfer_request("fileops/move", from_path, to_path, root);
        self.fetch_json(request).await
    }

    /// Create a folder.
    pub async fn file_create_folder(&self, path: &str, root: Option<Root>) -> Result<Value> {
        let request = self.path_request("fileops/create_folder", path, root);
        self.fetch_json(request).await
    }

    /// Delete a file or folder.
    ///
    /// The response body is returned undecoded.
    pub async fn file_delete(&self, path: &str, root: Option<Root>) -> Result<Vec<u8>> {
        let request = self.path_request("fileops/delete", path, root);
        self.fetch_raw(request).await
    }

    fn transfer_request(
        &self,
        resource: &str,
        from_path: &str,
        to_path: &str,
        root: Option<Root>,
    ) -> FetchRequest {
        let root = Root::resolve(root, self.root());
        FetchRequest::get(self.api_url(resource)).with_params(Params::fields([
            ("from_path", canonical_path(from_path)),
            ("to_path", canonical_path(to_path)),
            ("root", root.as_str()),
        ]))
    }

    fn path_request(&self, resource: &str, path: &str, root: Option<Root>) -> FetchRequest {
        let (root, path) = self.resolve(root, path);
        FetchRequest::get(self.api_url(resource))
            .with_params(Params::fields([("path", path), ("root", root.as_str())]))
    }
}
