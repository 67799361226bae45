//! # Advisor CLI Library
//!
//! Command-line front end for the Hold'em decision-support engine: an
//! interactive menu that collects cards, stacks and blinds, walks a hand
//! street by street, and prints a fold/call/raise recommendation each time.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a command handler and returns an
//! exit code. [`run_with_input`] does the same with an injected input stream.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//! let mut input = Cursor::new(b"4\n".to_vec());
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! let code = advisor_cli::run_with_input(
//!     ["advisor", "menu", "--engine", "passive"],
//!     &mut input,
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("MAIN MENU"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `menu`: interactive session (the default when no subcommand is given)
//! - `cfg`: display the resolved configuration and where each value came from

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod prompt;
pub mod ui;
pub mod validation;

use cli::{AdvisorCli, Commands};
use commands::{handle_cfg_command, handle_menu_command};
pub use error::CliError;

const COMMANDS: &[&str] = &["menu", "cfg"];

/// Main entry point, reading interactive input from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes in the
/// middle of a prompt.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match AdvisorCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let cmd = cli.cmd.unwrap_or(Commands::Menu {
        engine: None,
        seed: None,
    });
    tracing::debug!(command = cmd.as_str(), "dispatching");

    let result = match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Menu { engine, seed } => config::load_with_sources()
            .and_then(|resolved| resolved.with_overrides(engine, seed))
            .map_err(|e| CliError::Config(e.to_string()))
            .and_then(|resolved| {
                let config::Config { engine, seed, .. } = resolved.config;
                handle_menu_command(&engine, seed, out, err, input)
            }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::for_error(&e)
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Hold'em Decision Advisor").is_err()
                || writeln!(err, "Usage: advisor [command] [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: advisor --help");
            exit_code::ERROR
        }
    }
}
