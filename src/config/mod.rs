//! Configuration module for path building and markdown conversion
//!
//! This module provides the `PathConfig` struct and its type-safe builder.
//! A `PathConfig` is built once from merged CLI/config-file input and is
//! read-only afterwards; it is passed by reference into every entry point.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{PathConfigBuilder, WithOutput};
pub use types::{DateFolders, PathConfig, SaveImages};
