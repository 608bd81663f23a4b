//! Manifest store: JSON save/load with atomic replace

use crate::error::ManifestError;
use crate::types::Manifest;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

const INDENT: &[u8] = b"    ";

/// Render a manifest in its persisted textual form (trailing newline included)
pub fn to_json_string(manifest: &Manifest) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    manifest.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a manifest from its textual form
pub fn from_json_str(content: &str) -> Result<Manifest, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a manifest from raw bytes; invalid UTF-8 is a parse error
pub fn from_json_slice(content: &[u8]) -> Result<Manifest, serde_json::Error> {
    serde_json::from_slice(content)
}

/// Persist `manifest` to `destination`.
///
/// The content is written to a temporary file next to the destination and
/// renamed over it, so readers never observe a partially written manifest.
#[instrument(skip(manifest), fields(path = %destination.display(), entries = manifest.len()))]
pub fn save(manifest: &Manifest, destination: &Path) -> Result<(), ManifestError> {
    let write_err = |source: std::io::Error| ManifestError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let content = to_json_string(manifest).map_err(|e| write_err(e.into()))?;

    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&parent).map_err(write_err)?;
    // NamedTempFile is created 0600; a manifest is meant to be shared
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(destination).map_err(|e| write_err(e.error))?;

    info!(bytes = content.len(), "Manifest written");
    Ok(())
}

/// Load a manifest from `source`.
#[instrument(fields(path = %source.display()))]
pub fn load(source: &Path) -> Result<Manifest, ManifestError> {
    if !source.is_file() {
        return Err(ManifestError::NotFound(source.to_path_buf()));
    }

    let content = std::fs::read(source).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ManifestError::NotFound(source.to_path_buf()),
        _ => ManifestError::Read {
            path: source.to_path_buf(),
            source: e,
        },
    })?;

    let manifest = from_json_slice(&content).map_err(|e| ManifestError::Parse {
        path: source.to_path_buf(),
        source: e,
    })?;

    debug!(entries = manifest.len(), "Manifest loaded");
    Ok(manifest)
}
