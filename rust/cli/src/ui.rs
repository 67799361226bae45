//! UI helper functions for terminal output formatting.
//!
//! Banners, rules, and the messages shown when a prompt rejects input.

use advisor_engine::errors::AdvisorError;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// A horizontal rule of `width` copies of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Write a title framed by two rules, preceded by a blank line.
pub fn banner(out: &mut dyn Write, title: &str, ch: char, width: usize) -> std::io::Result<()> {
    let line = rule(ch, width);
    writeln!(out)?;
    writeln!(out, "{}", line)?;
    writeln!(out, "{:^width$}", title, width = width)?;
    writeln!(out, "{}", line)
}

/// Message shown before re-prompting after `error`.
pub fn retry_message(error: &AdvisorError) -> String {
    match error {
        AdvisorError::InvalidCardFormat { .. } => {
            "Invalid card format. Use format like AH, KS, 2D, TC, etc.".to_string()
        }
        AdvisorError::InvalidAmount { minimum, .. } => {
            format!("Invalid amount. Please enter a number >= {}", minimum)
        }
        AdvisorError::InvalidRange { lo, hi, .. } => {
            format!("Invalid input. Please enter a number between {} and {}", lo, hi)
        }
        AdvisorError::DuplicateCard { card } => format!("Card {} is already in play.", card),
        other => other.to_string(),
    }
}
