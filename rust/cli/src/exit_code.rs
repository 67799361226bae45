//! Exit code constants for the CLI application.

use crate::error::CliError;

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Input closed in the middle of a prompt (same code as Ctrl+C).
pub const INTERRUPTED: i32 = 130;

/// Exit code for a command that failed with `err`.
pub fn for_error(err: &CliError) -> i32 {
    match err {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
