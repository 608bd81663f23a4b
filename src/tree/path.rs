//! Path canonicalization and manifest-key construction

use crate::types::RelativePath;
use std::path::{Component, Path, PathBuf};

/// Why a filesystem path could not become a manifest key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativePathError {
    /// The path does not live under the scan root
    OutsideRoot,
    /// A component is not valid UTF-8
    NotUtf8,
    /// The path is the root itself
    Empty,
}

impl std::fmt::Display for RelativePathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelativePathError::OutsideRoot => write!(f, "path is outside the scan root"),
            RelativePathError::NotUtf8 => write!(f, "path is not valid UTF-8"),
            RelativePathError::Empty => write!(f, "path is the scan root itself"),
        }
    }
}

/// Resolve the scan root to an absolute path without `.`/`..` segments.
///
/// Uses dunce so Windows roots do not come back in `\\?\` form.
pub fn canonicalize_root(root: &Path) -> std::io::Result<PathBuf> {
    dunce::canonicalize(root)
}

/// Build the manifest key for `path`, which must live under `root`.
///
/// Components are joined with `/`. Names are kept byte-for-byte as they are on
/// disk: two files whose names differ only in Unicode form get distinct keys.
pub fn relative_to_root(root: &Path, path: &Path) -> Result<RelativePath, RelativePathError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| RelativePathError::OutsideRoot)?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or(RelativePathError::NotUtf8)?;
                parts.push(name);
            }
            Component::CurDir => {}
            _ => return Err(RelativePathError::OutsideRoot),
        }
    }

    if parts.is_empty() {
        return Err(RelativePathError::Empty);
    }

    Ok(RelativePath::new(parts.join("/")))
}
