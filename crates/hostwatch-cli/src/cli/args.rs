//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Point-in-time host inspection for persistence and compromise
///
/// Scans local accounts, running processes and auto-start entries with
/// simple heuristics and reports anything suspicious. Nothing is changed
/// on the system.
///
/// Account and startup scans need an elevated (Administrator) shell.
#[derive(Parser, Debug)]
#[command(name = "hostwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "HOSTWATCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command checks before running it
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check local user accounts for hidden or unexpected administrators
    Accounts,

    /// Check running processes for impersonation and risky locations
    Processes,

    /// Check registry run keys and startup folders
    Startup,

    /// Run the account, process and startup scans in sequence
    All,

    /// Print the effective rule tables
    Rules,

    /// Manage configuration
    Config(ConfigArgs),
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Write a config file populated with the default rules
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
