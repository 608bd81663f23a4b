//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file (or an
//! explicit `--config` file), then `TREESEAL__*` environment variables. CLI
//! flags are applied on top by the binary.

use crate::error::CommandError;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreesealConfig {
    /// Tree scanning settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Compare report rendering
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree scanning settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path component names to skip. Empty means every regular file is hashed.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Maximum walk depth below the root (unlimited when unset)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl ScanConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            ignore_patterns: self.ignore.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Compare report rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report format: text, json
    #[serde(default = "default_report_format")]
    pub format: String,

    /// Colour the text report when writing to a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_report_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_report_format(),
            color: default_true(),
        }
    }
}

impl TreesealConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.report.format != "text" && self.report.format != "json" {
            errors.push(format!(
                "report.format: invalid value '{}' (must be 'text' or 'json')",
                self.report.format
            ));
        }
        if self.scan.ignore.iter().any(|p| p.trim().is_empty()) {
            errors.push("scan.ignore: patterns cannot be empty".to_string());
        }
        if self.scan.max_depth == Some(0) {
            errors.push("scan.max_depth: must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads `TreesealConfig` from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global config file if present, and environment overrides
    pub fn load() -> Result<TreesealConfig, CommandError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder, global_config_path())?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load defaults, the given file (which must exist), and environment overrides
    pub fn load_from_file(path: &Path) -> Result<TreesealConfig, CommandError> {
        if !path.is_file() {
            return Err(CommandError::Config(format!(
                "Configuration file not found at {:?}",
                path
            )));
        }
        let builder = merge::builder_with_defaults()?;
        let builder = sources::explicit_file::add_to_builder(builder, path)?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load from `path` when given, otherwise from the default locations
    pub fn resolve(path: Option<&PathBuf>) -> Result<TreesealConfig, CommandError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load(),
        }
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<TreesealConfig, CommandError> {
        let config: TreesealConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            CommandError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        Ok(config)
    }
}
