//! CLI parse: clap types for treeseal. No behavior; definitions only.

use clap::{Args, Parser};
use std::path::PathBuf;

/// Treeseal CLI - create or compare a hash manifest for a directory
#[derive(Parser, Debug)]
#[command(name = "treeseal", version)]
#[command(about = "Create or compare a hash manifest for a directory")]
pub struct Cli {
    /// The directory to process
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Compare report format (text or json)
    #[arg(long, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Disable coloured report output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging, including an explicit --log-level
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Exactly one of generate (`--output`) or compare (`--compare`)
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ModeArgs {
    /// Generate a hash manifest and save it to the specified JSON file path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Compare the directory against the specified hash manifest JSON file
    #[arg(short, long, value_name = "PATH")]
    pub compare: Option<PathBuf>,
}

/// The pipeline a run executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Scan the directory and write a manifest
    Generate { output: PathBuf },
    /// Load a manifest, scan the directory, report differences
    Compare { manifest: PathBuf },
}
