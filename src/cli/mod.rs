//! Command-line interface.

pub mod completions;
pub mod output;
pub mod redact;
pub mod run;
pub mod status;

use clap::{Parser, Subcommand};

use crate::core::constants;

/// Shopsync - a safe-by-default store-sync agent.
#[derive(Parser)]
#[command(
    name = "shopsync",
    about = "A safe-by-default store-sync agent for B2B commerce portals",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Execute a sync run
    Run {
        /// Resolve secrets from the live backend instead of placeholders
        #[arg(long)]
        live: bool,
    },

    /// Show resolved configuration and backend availability
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mask a value for safe sharing
    Redact {
        /// Value to mask
        value: String,

        /// Leading characters to keep
        #[arg(short, long, default_value_t = constants::REDACT_KEEP)]
        keep: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Run { live } => run::execute(live),
        Status { json } => status::execute(json),
        Redact { value, keep } => redact::execute(&value, keep),
        Completions { shell } => completions::execute(shell),
    }
}
