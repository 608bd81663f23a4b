//! Tree scanner: walk a root, digest every regular file, build a manifest

use crate::error::ScanError;
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use crate::types::{Digest, Manifest, RelativePath, ScanResult, SkippedEntry};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};

/// Scanner for producing a manifest of a live directory tree
pub struct Scanner {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
}

impl Scanner {
    /// Create a new scanner for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
        }
    }

    /// Set walker config (ignore patterns, max depth).
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Scan the tree.
    ///
    /// Fails only when the root is missing or not a directory. Files that
    /// cannot be read are skipped and listed in `ScanResult::skipped`.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let start = Instant::now();

        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }
        let root = path::canonicalize_root(&self.root)
            .map_err(|_| ScanError::NotADirectory(self.root.clone()))?;
        info!("Starting scan");

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(root.clone(), config.clone()),
            None => Walker::new(root.clone()),
        };
        let entries = walker.walk();
        debug!(entry_count = entries.len(), "Walked filesystem");

        let mut files: Vec<(RelativePath, Digest)> = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in entries {
            match entry {
                Entry::File { path, size } => match self.digest_entry(&root, &path, size) {
                    Ok(pair) => files.push(pair),
                    Err(skip) => skipped.push(skip),
                },
                Entry::Unreadable { path, reason } => {
                    skipped.push(SkippedEntry { path, reason });
                }
            }
        }

        let manifest: Manifest = files.into_iter().collect();

        info!(
            file_count = manifest.len(),
            skipped_count = skipped.len(),
            duration_ms = start.elapsed().as_millis(),
            "Scan completed"
        );

        Ok(ScanResult { manifest, skipped })
    }

    fn digest_entry(
        &self,
        root: &Path,
        file_path: &Path,
        size: u64,
    ) -> Result<(RelativePath, Digest), SkippedEntry> {
        let relative = path::relative_to_root(root, file_path).map_err(|e| {
            warn!(path = %file_path.display(), error = %e, "Skipping file");
            SkippedEntry {
                path: file_path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let digest = hasher::digest_file(file_path).map_err(|e| {
            warn!(path = %file_path.display(), error = %e.source, "Skipping unreadable file");
            SkippedEntry {
                path: file_path.to_path_buf(),
                reason: e.source.to_string(),
            }
        })?;

        trace!(path = %relative, size, digest = %digest, "Hashed file");
        Ok((relative, digest))
    }
}

/// Scan `root` with the default walker configuration
pub fn scan(root: &Path) -> Result<ScanResult, ScanError> {
    Scanner::new(root.to_path_buf()).scan()
}
