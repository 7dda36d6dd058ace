//! API operations split into focused modules.

mod account;
mod files;
mod fileops;
mod metadata;
mod thumbnails;

pub use metadata::MetadataOptions;
pub use thumbnails::ThumbnailSize;
