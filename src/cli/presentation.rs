//! CLI presentation: render run results as text or JSON.

use crate::diff::ComparisonReport;
use crate::types::{RelativePath, SkippedEntry};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub const NO_CHANGES: &str = "No changes detected.";

pub fn format_generate_header(directory: &Path) -> String {
    format!("Generating hashes for directory: {}", directory.display())
}

pub fn format_generate_summary(output: &Path, file_count: usize) -> String {
    format!(
        "Successfully created hash manifest at: {} ({} {})",
        output.display(),
        file_count,
        if file_count == 1 { "file" } else { "files" }
    )
}

pub fn format_compare_header(directory: &Path, manifest: &Path) -> String {
    format!(
        "Comparing directory '{}' with manifest '{}'",
        directory.display(),
        manifest.display()
    )
}

/// Text report: `[ADDED]`, `[REMOVED]`, `[MODIFIED]` sections, empty ones omitted.
pub fn format_report_text(report: &ComparisonReport, color: bool) -> String {
    if !report.has_changes() {
        return NO_CHANGES.to_string();
    }

    let mut lines = Vec::new();
    push_section(&mut lines, "[ADDED]", '+', &report.added, color);
    push_section(&mut lines, "[REMOVED]", '-', &report.removed, color);
    push_section(&mut lines, "[MODIFIED]", '~', &report.modified, color);
    lines.join("\n")
}

fn push_section(
    lines: &mut Vec<String>,
    title: &str,
    sigil: char,
    paths: &[RelativePath],
    color: bool,
) {
    if paths.is_empty() {
        return;
    }
    if color {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title.to_string());
    }
    for path in paths {
        let line = format!("{} {}", sigil, path);
        if !color {
            lines.push(line);
            continue;
        }
        lines.push(match sigil {
            '+' => line.green().to_string(),
            '-' => line.red().to_string(),
            _ => line.yellow().to_string(),
        });
    }
}

/// JSON report: `changed` flag plus the three change lists.
pub fn format_report_json(report: &ComparisonReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "changed": report.has_changes(),
        "added": report.added,
        "removed": report.removed,
        "modified": report.modified,
    }))
}

/// One stderr line per skipped entry
pub fn format_skipped(skipped: &[SkippedEntry]) -> Vec<String> {
    skipped
        .iter()
        .map(|s| format!("warning: skipped {}: {}", s.path.display(), s.reason))
        .collect()
}
