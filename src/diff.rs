//! Manifest comparison.
//!
//! Classifies every path of two manifests into added, removed, modified or
//! unchanged. The four lists are disjoint, sorted, and together cover
//! `keys(old) ∪ keys(new)` exactly.

use crate::types::{Manifest, RelativePath};
use serde::{Deserialize, Serialize};

/// Classification of every path across an old and a new manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// In new, not in old
    pub added: Vec<RelativePath>,
    /// In old, not in new
    pub removed: Vec<RelativePath>,
    /// In both, digests differ
    pub modified: Vec<RelativePath>,
    /// In both, digests equal. Not rendered, kept for completeness of the partition.
    #[serde(skip)]
    pub unchanged: Vec<RelativePath>,
}

impl ComparisonReport {
    /// True when anything was added, removed or modified
    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty())
    }

    /// Number of paths classified, equal to `|keys(old) ∪ keys(new)|`
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len() + self.unchanged.len()
    }
}

/// Compare `old` against `new`.
///
/// Walks both key-sorted manifests in a single merge pass, so each output
/// list comes out sorted without a separate sort step.
pub fn diff(old: &Manifest, new: &Manifest) -> ComparisonReport {
    let mut report = ComparisonReport::default();
    let mut old_iter = old.iter().peekable();
    let mut new_iter = new.iter().peekable();

    loop {
        match (old_iter.peek(), new_iter.peek()) {
            (Some((old_path, old_digest)), Some((new_path, new_digest))) => {
                match old_path.cmp(new_path) {
                    std::cmp::Ordering::Less => {
                        report.removed.push((*old_path).clone());
                        old_iter.next();
                    }
                    std::cmp::Ordering::Greater => {
                        report.added.push((*new_path).clone());
                        new_iter.next();
                    }
                    std::cmp::Ordering::Equal => {
                        if old_digest == new_digest {
                            report.unchanged.push((*old_path).clone());
                        } else {
                            report.modified.push((*old_path).clone());
                        }
                        old_iter.next();
                        new_iter.next();
                    }
                }
            }
            (Some((old_path, _)), None) => {
                report.removed.push((*old_path).clone());
                old_iter.next();
            }
            (None, Some((new_path, _))) => {
                report.added.push((*new_path).clone());
                new_iter.next();
            }
            (None, None) => break,
        }
    }

    report
}
