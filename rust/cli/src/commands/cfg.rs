//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of each value
//! (`default`, `file`, `env` or `cli`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "engine": {
//!     "value": "simulated",
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "log_level": {
//!     "value": "warn",
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command for configuration read from the process environment.
///
/// # Errors
///
/// Returns `CliError::Config` if the config file or an `ADVISOR_*` variable
/// is invalid, and `CliError::Io` if writing fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    write_resolved(&resolved, out)
}

pub(crate) fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "engine": {
            "value": config.engine,
            "source": sources.engine,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
