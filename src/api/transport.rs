//! The authenticated transport seam.
//!
//! A [`Transport`] performs one signed HTTP exchange and hands back the raw
//! response body. Signing, credentials, retry and timeouts all live behind
//! this trait; the client only shapes the request.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::error::TransportError;

/// HTTP method of a transport call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload: nothing, named parameters, or a raw body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Params {
    #[default]
    None,
    /// Named parameters; query string for GET, form body for POST.
    Fields(BTreeMap<String, String>),
    /// Pre-encoded request body.
    Body(Vec<u8>),
}

impl Params {
    /// Build a parameter mapping from key/value pairs.
    pub fn fields<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Params::Fields(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a named parameter.
    ///
    /// Transports that sign requests can use this to read individual
    /// values without matching on the variant. Returns `None` for
    /// [`Params::None`] and [`Params::Body`].
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Params::Fields(map) => map.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// Size of the payload in bytes (raw bodies only).
    pub fn body_len(&self) -> usize {
        match self {
            Params::Body(body) => body.len(),
            _ => 0,
        }
    }
}

/// One fully-shaped transport call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchRequest {
    /// Absolute request URI
    pub uri: String,
    /// Parameters or body
    pub params: Params,
    /// HTTP method
    pub method: Method,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl FetchRequest {
    /// A GET request with no parameters.
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// A POST request with no parameters.
    pub fn post(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            method: Method::Post,
            ..Default::default()
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Authenticated HTTP fetch capability.
///
/// Implementations must be safe to share between tasks; the client adds no
/// locking of its own.
pub trait Transport: Send + Sync {
    /// Perform the request and return the raw response body.
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        (**self).fetch(request)
    }
}

impl<T: Transport> Transport for &T {
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        (**self).fetch(request)
    }
}
