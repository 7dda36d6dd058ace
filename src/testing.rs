//! Recording transport for unit tests.

use std::sync::Mutex;

use crate::api::transport::{FetchRequest, Transport};
use crate::error::TransportError;

enum Reply {
    Body(Vec<u8>),
    Status(u16),
}

/// Records every request and answers with a canned reply.
pub(crate) struct SpyTransport {
    reply: Reply,
    calls: Mutex<Vec<FetchRequest>>,
}

impl SpyTransport {
    pub(crate) fn ok(body: &[u8]) -> Self {
        Self {
            reply: Reply::Body(body.to_vec()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            reply: Reply::Status(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn calls(&self) -> Vec<FetchRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// The only recorded request; panics unless exactly one was made.
    pub(crate) fn single_call(&self) -> FetchRequest {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls.into_iter().next().unwrap()
    }
}

impl Transport for SpyTransport {
    async fn fetch(&self, request: FetchRequest) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(request);
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status) => Err(TransportError::HttpError(*status)),
        }
    }
}
