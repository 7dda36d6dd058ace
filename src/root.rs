//! Storage root selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DropboxError;

/// The namespace a path-based operation resolves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Root {
    /// App folder only (restricted access)
    #[default]
    Sandbox,
    /// Whole account (full access)
    Dropbox,
}

impl Root {
    /// Path segment used in resource URIs and `root` parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Root::Sandbox => "sandbox",
            Root::Dropbox => "dropbox",
        }
    }

    /// Pick the override if one was given, otherwise `default`.
    pub fn resolve(explicit: Option<Root>, default: Root) -> Root {
        explicit.unwrap_or(default)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Root {
    type Err = DropboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Root::Sandbox),
            "dropbox" => Ok(Root::Dropbox),
            other => Err(DropboxError::InvalidArgument(format!(
                "Unknown root: {}",
                other
            ))),
        }
    }
}
