//! Directory tree scanning
//!
//! Walks a root directory, digests every regular file, and produces a
//! `Manifest` keyed by `/`-separated relative paths in lexicographic order.

pub mod hasher;
pub mod path;
pub mod scanner;
pub mod walker;
