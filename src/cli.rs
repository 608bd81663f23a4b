//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error, EXIT_FAILURE, EXIT_USAGE};
pub use parse::{Cli, Mode, ModeArgs};
pub use presentation::{
    format_compare_header, format_generate_header, format_generate_summary, format_report_json,
    format_report_text, format_skipped, NO_CHANGES,
};
pub use route::{resolve_mode, RunContext, RunOutput};
