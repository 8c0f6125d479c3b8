//! Output model
//!
//! Every command maps its outcome to an [`OutputItem`] before rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::result::CacheResult;

/// The kind of output item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Version,
    Item,
    Store,
    Presence,
    Path,
}

/// A single rendered outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    pub kind: Kind,

    /// Cache key as given by the caller (before version qualification)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Resolved item file path, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Cached content or detected version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub present: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored: Option<bool>,
}

impl OutputItem {
    fn empty(kind: Kind) -> Self {
        Self {
            kind,
            key: None,
            path: None,
            content: None,
            success: None,
            present: None,
            stored: None,
        }
    }

    /// Detected version (null when unresolved)
    pub fn version(version: Option<Value>) -> Self {
        Self {
            content: Some(version.unwrap_or(Value::Null)),
            ..Self::empty(Kind::Version)
        }
    }

    /// Result of a lookup
    pub fn item(key: impl Into<String>, path: impl Into<String>, result: CacheResult) -> Self {
        let success = result.success();
        Self {
            key: Some(key.into()),
            path: Some(path.into()),
            content: Some(result.into_content()),
            success: Some(success),
            ..Self::empty(Kind::Item)
        }
    }

    /// Result of a write
    pub fn store(key: impl Into<String>, path: impl Into<String>, stored: bool) -> Self {
        Self {
            key: Some(key.into()),
            path: Some(path.into()),
            stored: Some(stored),
            ..Self::empty(Kind::Store)
        }
    }

    /// Result of an existence check
    pub fn presence(key: impl Into<String>, present: bool) -> Self {
        Self {
            key: Some(key.into()),
            present: Some(present),
            ..Self::empty(Kind::Presence)
        }
    }

    /// Resolved item path
    pub fn path(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            path: Some(path.into()),
            ..Self::empty(Kind::Path)
        }
    }
}
