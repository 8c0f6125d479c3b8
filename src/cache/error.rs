//! Cache errors

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures surfaced by cache reads.
///
/// A missing or unreadable item file is not an error; it is reported as a
/// miss through [`CacheResult`](crate::cache::result::CacheResult).
#[derive(Debug, Error)]
pub enum CacheError {
    /// The item file exists but could not be read
    #[error("failed to read cache file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The item file holds bytes that are not valid JSON
    #[error("failed to decode cache file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CacheError {
    /// Path of the item file involved in the failure
    pub fn path(&self) -> &std::path::Path {
        match self {
            CacheError::Io { path, .. } | CacheError::Decode { path, .. } => path,
        }
    }
}
