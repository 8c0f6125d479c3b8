//! Cache module - File-backed cache proxy
//!
//! Provides:
//! - Cache proxy (get/set/has items, version detection)
//! - Result values returned by every read
//! - Typed errors for fatal read failures

pub mod error;
pub mod result;
pub mod store;
