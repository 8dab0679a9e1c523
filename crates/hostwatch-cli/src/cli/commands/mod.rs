//! Command implementations.

pub mod accounts;
pub mod all;
pub mod config;
pub mod processes;
pub mod rules;
pub mod startup;

use std::path::PathBuf;

use hostwatch_core::RuleSet;

use crate::education::Explain;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Config file in effect (may not exist)
    pub config_path: PathBuf,

    /// Rule tables, fixed for the whole run
    pub rules: RuleSet,
}

impl Context {
    /// Returns true if `--explain` text goes to stdout. Structured formats
    /// keep stdout parseable, so they never get it.
    pub fn shows_explain(&self) -> bool {
        self.explain && self.output_format == OutputFormat::Pretty
    }

    /// Print the explanation built by `explain` when it is wanted.
    pub fn print_explain(&self, explain: impl FnOnce() -> Explain) {
        if self.shows_explain() {
            explain().print();
        }
    }

    /// Fail unless running elevated. Checked before any enumeration.
    pub fn require_elevation(&self, scan: &str) -> anyhow::Result<()> {
        if hostwatch_discovery::privilege::is_elevated() {
            return Ok(());
        }
        anyhow::bail!(
            "the {scan} scan must run with administrator privileges.\n\n\
             Run it from an elevated shell:\n  \
             Windows: right-click the terminal and choose \"Run as administrator\"\n  \
             Unix:    sudo hostwatch {scan}"
        )
    }
}
