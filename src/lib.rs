//! browscap-cache - A file-backed cache proxy for browscap data
//!
//! browscap-cache provides:
//! - Named JSON items stored as `<folder>/<key>[.<version>].json`
//! - Version scoping driven by the cached `browscap.version` item
//! - Result values that report misses without raising errors
//! - Rendering helpers for the command-line front end

pub mod cache;
pub mod core;

pub use cache::error::CacheError;
pub use cache::result::CacheResult;
pub use cache::store::{BrowscapCache, VERSION_KEY};
