//! CLI route: run context and the two pipelines (generate, compare).

use crate::cli::parse::{Mode, ModeArgs};
use crate::cli::presentation::{
    format_compare_header, format_generate_header, format_generate_summary, format_report_json,
    format_report_text,
};
use crate::config::TreesealConfig;
use crate::diff::{diff, ComparisonReport};
use crate::error::CommandError;
use crate::manifest;
use crate::tree::scanner::Scanner;
use crate::types::{ScanResult, SkippedEntry};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve the mutually exclusive mode flags into a `Mode`.
///
/// The binary never reaches the error arms: clap's argument group rejects
/// both and neither flag at parse time. They cover `ModeArgs` values built
/// directly by library callers.
pub fn resolve_mode(args: &ModeArgs) -> Result<Mode, CommandError> {
    match (&args.output, &args.compare) {
        (Some(output), None) => Ok(Mode::Generate {
            output: output.clone(),
        }),
        (None, Some(manifest)) => Ok(Mode::Compare {
            manifest: manifest.clone(),
        }),
        (Some(_), Some(_)) => Err(CommandError::Usage(
            "--output and --compare cannot be used together".to_string(),
        )),
        (None, None) => Err(CommandError::Usage(
            "one of --output or --compare is required".to_string(),
        )),
    }
}

/// What a successful run produced
#[derive(Debug)]
pub struct RunOutput {
    /// Text for stdout
    pub stdout: String,
    /// Entries the scan had to skip; reported on stderr
    pub skipped: Vec<SkippedEntry>,
    /// Compare runs only
    pub report: Option<ComparisonReport>,
}

/// Runtime context for CLI execution: scan root and resolved configuration.
pub struct RunContext {
    directory: PathBuf,
    config: TreesealConfig,
    color: bool,
}

impl RunContext {
    pub fn new(directory: PathBuf, config: TreesealConfig) -> Self {
        let color = config.report.color;
        Self {
            directory,
            config,
            color,
        }
    }

    /// Override whether the text report is coloured
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn config(&self) -> &TreesealConfig {
        &self.config
    }

    /// Execute one pipeline.
    pub fn execute(&self, mode: &Mode) -> Result<RunOutput, CommandError> {
        match mode {
            Mode::Generate { output } => self.generate(output),
            Mode::Compare { manifest } => self.compare(manifest),
        }
    }

    fn scan(&self) -> Result<ScanResult, CommandError> {
        let scanner = Scanner::new(self.directory.clone())
            .with_walker_config(self.config.scan.walker_config());
        Ok(scanner.scan()?)
    }

    fn generate(&self, output: &Path) -> Result<RunOutput, CommandError> {
        info!(directory = %self.directory.display(), output = %output.display(), "Generate");
        let ScanResult { manifest, skipped } = self.scan()?;
        manifest::save(&manifest, output)?;

        let stdout = [
            format_generate_header(&self.directory),
            format_generate_summary(output, manifest.len()),
        ]
        .join("\n");

        Ok(RunOutput {
            stdout,
            skipped,
            report: None,
        })
    }

    fn compare(&self, manifest_path: &Path) -> Result<RunOutput, CommandError> {
        info!(directory = %self.directory.display(), manifest = %manifest_path.display(), "Compare");
        // Load first: a bad manifest must fail before any hashing work
        let old = manifest::load(manifest_path)?;
        let ScanResult {
            manifest: new,
            skipped,
        } = self.scan()?;

        let report = diff(&old, &new);
        debug!(
            added = report.added.len(),
            removed = report.removed.len(),
            modified = report.modified.len(),
            unchanged = report.unchanged.len(),
            "Comparison complete"
        );

        let stdout = if self.config.report.format == "json" {
            format_report_json(&report).map_err(|e| CommandError::Output(e.to_string()))?
        } else {
            [
                format_compare_header(&self.directory, manifest_path),
                format_report_text(&report, self.color),
            ]
            .join("\n")
        };

        Ok(RunOutput {
            stdout,
            skipped,
            report: Some(report),
        })
    }
}
