//! Treeseal: Content-Integrity Manifests for Directory Trees
//!
//! Scans a directory into a manifest of relative path to SHA-256 digest,
//! persists it as JSON, and later compares a live tree against a saved
//! manifest to report added, removed and modified files.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod types;
