//! Core value types shared by the scanner, the manifest store and the differ.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// SHA-256 output length in bytes
pub const DIGEST_LEN: usize = 32;

/// Length of a digest rendered as lowercase hex
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Fixed-length content fingerprint of a file.
///
/// Always rendered (and serialized) as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character lowercase hex string.
    ///
    /// Uppercase hex is rejected so that a manifest has exactly one textual
    /// form for each digest.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(format!(
                "digest must be {} hex characters, got {}",
                DIGEST_HEX_LEN,
                s.len()
            ));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(format!("digest must be lowercase hex: {:?}", s));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| e.to_string())?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Path of a file relative to the scan root, `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Wrap a `/`-separated path string.
    ///
    /// Use [`crate::tree::path::relative_to_root`] to derive one from a
    /// filesystem path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Integrity snapshot of a tree: relative path to content digest.
///
/// Backed by a `BTreeMap`, so iteration and serialization are key-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<RelativePath, Digest>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &RelativePath) -> Option<&Digest> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &RelativePath) -> bool {
        self.entries.contains_key(path)
    }

    /// Entries in lexicographic path order
    pub fn iter(&self) -> impl Iterator<Item = (&RelativePath, &Digest)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.keys()
    }
}

impl FromIterator<(RelativePath, Digest)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (RelativePath, Digest)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = (&'a RelativePath, &'a Digest);
    type IntoIter = std::collections::btree_map::Iter<'a, RelativePath, Digest>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// An entry the scanner excluded from its result, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Output of a live scan: the manifest plus anything that had to be skipped
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub manifest: Manifest,
    pub skipped: Vec<SkippedEntry>,
}

impl ScanResult {
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}
