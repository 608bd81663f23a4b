//! Error types for treeseal.

use std::path::PathBuf;
use thiserror::Error;

/// A single file could not be opened or read to completion.
///
/// Recovered by the scanner: the file is skipped and the scan continues.
#[derive(Debug, Error)]
#[error("Failed to read {path:?}: {source}")]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Scan-level errors. Anything per-entry is recorded as a skipped entry instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory not found at {0:?}")]
    NotADirectory(PathBuf),
}

/// Manifest persistence errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Comparison file not found at {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read manifest {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write manifest {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by a CLI run
#[derive(Debug, Error)]
pub enum CommandError {
    /// Conflicting or missing mode in a programmatically built `ModeArgs`
    #[error("Usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for CommandError {
    fn from(err: config::ConfigError) -> Self {
        CommandError::Config(err.to_string())
    }
}
