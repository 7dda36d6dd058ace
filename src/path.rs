//! Resource path helpers.
//!
//! Paths are passed through as given apart from stripping leading slashes:
//! no `..` handling, no collapsing of inner `//`, no percent-encoding.
//! Query values are the exception and are always percent-encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::root::Root;

/// Everything except RFC 3986 unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Strip all leading slashes from a user-supplied path.
pub(crate) fn canonical_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Directory segment for an upload target.
///
/// `"."` means the root folder and maps to the empty string.
pub(crate) fn upload_directory(directory: &str) -> &str {
    let dir = canonical_path(directory);
    if dir == "." {
        return "";
    }
    dir.trim_matches('/')
}

/// Split a remote upload path into `(directory, filename)`.
///
/// A bare name has directory `"."`, like `dirname` would report.
pub(crate) fn split_upload_path(path: &str) -> (&str, &str) {
    let path = canonical_path(path);
    match path.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => (".", path),
    }
}

/// Percent-encode a single query string value.
pub(crate) fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Join an operation prefix, a root and a path into a resource path.
pub(crate) fn resource_path(prefix: &str, root: Root, path: &str) -> String {
    format!("{}/{}/{}", prefix, root, canonical_path(path))
}
