//! Core data types for mvnpin.
//!
//! This crate defines what the rest of the workspace talks about: library
//! coordinates, the exported dependency tree, the `Mvnpin.toml` project
//! manifest and the global configuration.
//!
//! Nothing in here edits files; format-preserving writes live in `mvnpin-ops`.

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "Mvnpin.toml";

/// File name of the exported dependency tree looked up by default.
pub const DEFAULT_TREE_FILE: &str = "deps.json";

pub mod config;
pub mod dependency;
pub mod manifest;
pub mod tree;
