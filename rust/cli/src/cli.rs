//! Command-line argument definitions.

use advisor_ai::ENGINE_KINDS;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "advisor",
    version,
    about = "Hold'em decision-support CLI: enter your cards and stacks, get a fold/call/raise recommendation"
)]
pub struct AdvisorCli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu {
        /// Decision engine to consult
        #[arg(long, value_parser = PossibleValuesParser::new(ENGINE_KINDS.iter().copied()))]
        engine: Option<String>,
        /// Seed for the simulated engine
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration with value sources
    Cfg,
}

impl Commands {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commands::Menu { .. } => "menu",
            Commands::Cfg => "cfg",
        }
    }
}
