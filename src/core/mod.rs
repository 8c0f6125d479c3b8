//! Core module - Shared building blocks
//!
//! This module provides:
//! - Key-to-path composition
//! - Output model for command results
//! - Rendering functions for different output formats
//! - Common utilities

pub mod model;
pub mod paths;
pub mod render;
pub mod util;
