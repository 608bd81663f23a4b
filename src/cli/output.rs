//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CommandError;

/// Exit code for usage errors (matches clap's own)
pub const EXIT_USAGE: i32 = 2;

/// Exit code for every other fatal error
pub const EXIT_FAILURE: i32 = 1;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &CommandError) -> String {
    format!("Error: {}", e)
}

/// Map an error to the process exit code.
pub fn exit_code(e: &CommandError) -> i32 {
    match e {
        CommandError::Usage(_) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}
