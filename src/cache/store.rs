//! Cache store - Read/write versioned JSON item files

use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cache::error::CacheError;
use crate::cache::result::CacheResult;
use crate::core::paths::{item_path, qualify_key};

/// Key of the item holding the detected browscap version
pub const VERSION_KEY: &str = "browscap.version";

/// On-disk wrapper written around every cached value
#[derive(Serialize)]
struct Envelope<'a, T: ?Sized> {
    content: &'a T,
}

/// Cache proxy bound to a directory of JSON item files.
///
/// Items live at `<folder>/<key>.json`, or `<folder>/<key>.<version>.json`
/// when version-qualified. The version is read from the unversioned
/// [`VERSION_KEY`] item the first time it is needed and memoized for the
/// lifetime of the proxy.
#[derive(Debug)]
pub struct BrowscapCache {
    folder: PathBuf,
    version: OnceCell<Value>,
}

impl BrowscapCache {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            version: OnceCell::new(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Detected browscap version.
    ///
    /// Returns `Ok(None)` while no version item can be found. A found
    /// version is never re-read by this instance.
    pub fn version(&self) -> Result<Option<Value>, CacheError> {
        if let Some(version) = self.version.get() {
            return Ok(Some(version.clone()));
        }

        let lookup = self.get_item_with(VERSION_KEY, false)?;
        if !lookup.is_present() {
            debug!(folder = %self.folder.display(), "no cached version found");
            return Ok(None);
        }

        // A concurrent caller may have won the race; both read the same file.
        let version = self.version.get_or_init(|| lookup.into_content());
        debug!(%version, "memoized cache version");
        Ok(Some(version.clone()))
    }

    /// Get a version-qualified item
    pub fn get_item(&self, cache_id: &str) -> Result<CacheResult, CacheError> {
        self.get_item_with(cache_id, true)
    }

    /// Get an item, optionally qualified with the detected version.
    ///
    /// A missing or inaccessible file is a miss. Other read failures and
    /// malformed JSON are returned as errors.
    pub fn get_item_with(
        &self,
        cache_id: &str,
        with_version: bool,
    ) -> Result<CacheResult, CacheError> {
        let file = self.resolve_path(cache_id, with_version)?;

        let data = match fs::read(&file) {
            Ok(data) => data,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                debug!(path = %file.display(), kind = ?e.kind(), "cache miss");
                return Ok(CacheResult::miss());
            }
            Err(source) => return Err(CacheError::Io { path: file, source }),
        };

        let object: Value = serde_json::from_slice(&data)
            .map_err(|source| CacheError::Decode {
                path: file.clone(),
                source,
            })?;

        match object.get("content") {
            Some(content) => {
                debug!(path = %file.display(), "cache hit");
                Ok(CacheResult::hit(content.clone()))
            }
            None => {
                debug!(path = %file.display(), "cache file has no content field");
                Ok(CacheResult::miss())
            }
        }
    }

    /// Store a version-qualified item
    pub fn set_item<T: Serialize + ?Sized>(&self, cache_id: &str, content: &T) -> bool {
        self.set_item_with(cache_id, content, true)
    }

    /// Save `content` into the item's JSON file.
    ///
    /// Creates or overwrites the file. Every failure is reported as `false`.
    pub fn set_item_with<T: Serialize + ?Sized>(
        &self,
        cache_id: &str,
        content: &T,
        with_version: bool,
    ) -> bool {
        let file = match self.resolve_path(cache_id, with_version) {
            Ok(file) => file,
            Err(e) => {
                warn!(error = %e, cache_id, "could not resolve version for write");
                return false;
            }
        };

        let json = match serde_json::to_vec(&Envelope { content }) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, path = %file.display(), "failed to encode cache item");
                return false;
            }
        };

        match fs::write(&file, json) {
            Ok(()) => {
                debug!(path = %file.display(), "cache item written");
                true
            }
            Err(e) => {
                warn!(error = %e, path = %file.display(), "failed to write cache item");
                false
            }
        }
    }

    /// Test if a version-qualified item exists
    pub fn has_item(&self, cache_id: &str) -> Result<bool, CacheError> {
        self.has_item_with(cache_id, true)
    }

    /// Test if an item exists with non-null content
    pub fn has_item_with(&self, cache_id: &str, with_version: bool) -> Result<bool, CacheError> {
        Ok(self.get_item_with(cache_id, with_version)?.is_present())
    }

    /// Path of the cache file for a (possibly qualified) key
    pub fn get_path(&self, keyname: &str) -> PathBuf {
        item_path(&self.folder, keyname)
    }

    /// Path of the cache file for a caller key, qualifying it with the
    /// detected version when `with_version` is set
    pub fn resolve_path(&self, cache_id: &str, with_version: bool) -> Result<PathBuf, CacheError> {
        if !with_version {
            return Ok(self.get_path(cache_id));
        }
        let version = self.version()?;
        Ok(self.get_path(&qualify_key(cache_id, version.as_ref())))
    }
}
