//! Filesystem walker for traversing directory structures

use std::path::PathBuf;
use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file with its path and size
    File { path: PathBuf, size: u64 },
    /// Something the walk could not inspect (unreadable directory, vanished entry)
    Unreadable { path: PathBuf, reason: String },
}

impl Entry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Entry::File { path, .. } | Entry::Unreadable { path, .. } => path,
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Path component names to skip entirely (e.g. ".git"). Empty by default.
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Filesystem walker.
///
/// Never follows symbolic links. Only regular files are yielded; directories,
/// symlinks, sockets, FIFOs and devices are left out.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all regular files.
    ///
    /// Entries come back sorted by path. Walk failures are returned as
    /// `Entry::Unreadable` rather than aborting.
    pub fn walk(&self) -> Vec<Entry> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|e| !self.should_ignore(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| self.root.clone());
                    warn!(path = %path.display(), error = %e, "Failed to walk entry");
                    entries.push(Entry::Unreadable {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                trace!(path = %entry.path().display(), "Skipping non-regular entry");
                continue;
            }

            let path = entry.path().to_path_buf();
            match entry.metadata() {
                Ok(metadata) => entries.push(Entry::File {
                    path,
                    size: metadata.len(),
                }),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read metadata");
                    entries.push(Entry::Unreadable {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        entries.sort_by(|a, b| a.path().cmp(b.path()));
        entries
    }

    /// Check if an entry should be ignored based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || self.config.ignore_patterns.is_empty() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}
