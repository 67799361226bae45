//! Error types for the CLI application.
//!
//! [`CliError`] wraps everything that can stop a command: I/O failures,
//! configuration problems, and engine errors that escape an input prompt.
//! Validation errors never reach this type during normal use because the
//! prompts re-ask until the input is valid.

use advisor_engine::errors::AdvisorError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin reads, stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(AdvisorError),

    /// Input closed while a prompt was waiting
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<AdvisorError> for CliError {
    fn from(error: AdvisorError) -> Self {
        match error {
            AdvisorError::InputClosed => CliError::Interrupted("input closed".to_string()),
            AdvisorError::UnknownEngine { kind } => {
                CliError::Config(format!("unknown engine '{}'", kind))
            }
            other => CliError::Engine(other),
        }
    }
}
