//! Command handler modules for the advisor CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via `CliError`

mod cfg;
mod menu;

pub use cfg::handle_cfg_command;
pub use menu::handle_menu_command;
