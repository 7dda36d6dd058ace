//! Multipart body construction for file uploads.

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

/// Boundary token used when nothing else is configured.
pub const DEFAULT_BOUNDARY: &str = "----------ThIs_Is_tHe_bouNdaRY_$";

/// Length of the random part of a generated boundary.
const RANDOM_BOUNDARY_LEN: usize = 32;

/// How the multipart boundary is chosen for each upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// The same token for every upload (reproducible)
    Fixed(String),
    /// A fresh random token per upload
    Random,
}

impl Boundary {
    /// Produce the token for one upload.
    pub fn token(&self) -> String {
        match self {
            Boundary::Fixed(token) => token.clone(),
            Boundary::Random => random_token(),
        }
    }

    /// Produce the token for an upload of `data`.
    ///
    /// Random tokens are redrawn until they do not occur in `data`. Fixed
    /// tokens are returned unchanged.
    pub fn token_for(&self, data: &[u8]) -> String {
        match self {
            Boundary::Fixed(token) => token.clone(),
            Boundary::Random => first_unused(data, random_token),
        }
    }
}

fn first_unused(data: &[u8], mut draw: impl FnMut() -> String) -> String {
    loop {
        let token = draw();
        if !occurs_in(data, &token) {
            return token;
        }
    }
}

fn random_token() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_BOUNDARY_LEN)
        .map(char::from)
        .collect();
    format!("----------{}", suffix)
}

fn occurs_in(data: &[u8], token: &str) -> bool {
    data.windows(token.len()).any(|w| w == token.as_bytes())
}

impl Default for Boundary {
    fn default() -> Self {
        Boundary::Fixed(DEFAULT_BOUNDARY.to_string())
    }
}

/// A single-file `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    /// Encode `data` as the `file` field named `filename`.
    pub fn file(boundary: impl Into<String>, filename: &str, data: &[u8]) -> Self {
        let boundary = boundary.into();
        let mut body = Vec::with_capacity(data.len() + 128 + filename.len() + 2 * boundary.len());

        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=file; filename={}\r\n", filename)
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-type: application/octet-stream\r\n");
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(format!("--{}--", boundary).as_bytes());

        Self { boundary, body }
    }

    /// Boundary token the body was built with.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}

/// Parse a body produced by [`MultipartBody::file`] back into
/// `(filename, data)`.
#[cfg(test)]
pub(crate) fn parse_file_body(boundary: &str, body: &[u8]) -> Option<(String, Vec<u8>)> {
    let opening = format!("--{}\r\n", boundary);
    let closing = format!("\r\n--{}--", boundary);

    let rest = body.strip_prefix(opening.as_bytes())?;
    let rest = rest.strip_suffix(closing.as_bytes())?;

    let split = rest.windows(4).position(|w| w == b"\r\n\r\n")?;
    let headers = std::str::from_utf8(&rest[..split]).ok()?;
    let data = rest[split + 4..].to_vec();

    let filename = headers
        .split("\r\n")
        .find(|line| line.starts_with("Content-Disposition:"))?
        .split("; ")
        .find_map(|part| part.strip_prefix("filename="))?
        .to_string();

    Some((filename, data))
}
