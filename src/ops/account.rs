//! Account operations.

use serde_json::Value;

use crate::api::{DropboxClient, FetchRequest, Transport};
use crate::error::Result;

impl<T: Transport> DropboxClient<T> {
    /// Get information about the linked account.
    pub async fn account_info(&self) -> Result<Value> {
        let uri = self.api_url("account/info");
        self.fetch_json(FetchRequest::get(uri)).await
    }
}
