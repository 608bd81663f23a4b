//! Treeseal CLI Binary
//!
//! Generate a content-integrity manifest for a directory, or compare a
//! directory against a saved one.

use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};
use treeseal::cli::{self, Cli, RunContext};
use treeseal::config::{ConfigLoader, TreesealConfig};
use treeseal::logging::{init_logging, LoggingConfig};

fn main() {
    // clap reports usage errors itself (exit code 2) before any work happens
    let cli = Cli::parse();

    let mut config = match ConfigLoader::resolve(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", cli::map_error(&e));
            process::exit(cli::exit_code(&e));
        }
    };
    apply_cli_overrides(&cli, &mut config);

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(cli::EXIT_FAILURE);
    }

    info!("Treeseal CLI starting");

    let mode = match cli::resolve_mode(&cli.mode) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", cli::map_error(&e));
            process::exit(cli::exit_code(&e));
        }
    };

    let color = use_color(&cli, &config);
    let context = RunContext::new(cli.directory.clone(), config).with_color(color);

    match context.execute(&mode) {
        Ok(output) => {
            for line in cli::format_skipped(&output.skipped) {
                eprintln!("{}", line);
            }
            info!("Command completed successfully");
            println!("{}", output.stdout);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(cli::exit_code(&e));
        }
    }
}

/// Fold report flags into the loaded configuration.
fn apply_cli_overrides(cli: &Cli, config: &mut TreesealConfig) {
    if let Some(ref format) = cli.format {
        config.report.format = format.clone();
    }
    if cli.no_color {
        config.report.color = false;
    }
}

/// Colour only when configured, requested, and stdout is a terminal.
fn use_color(cli: &Cli, config: &TreesealConfig) -> bool {
    config.report.color
        && !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &TreesealConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }
    if cli.quiet {
        logging.enabled = false;
    }

    logging
}
