//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::path::Path;

use anyhow::{Context as _, Result};
use args::{Cli, Commands};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve and load configuration
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    // `config` subcommands must still work when the file is broken
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Commands::Config(_)) => {
            warn!("{e:#}");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let no_color = cli.no_color || config.no_color;
    if no_color {
        colored::control::set_override(false);
    }

    // Create context for commands
    let ctx = commands::Context {
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or(OutputFormat::Pretty),
        explain: cli.explain,
        config_path,
        rules: config.rules,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Accounts => commands::accounts::execute(&ctx),
        Commands::Processes => commands::processes::execute(&ctx),
        Commands::Startup => commands::startup::execute(&ctx),
        Commands::All => commands::all::execute(&ctx),
        Commands::Rules => commands::rules::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Load the config file and check its rule tables.
fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)?;
    config
        .rules
        .validate()
        .with_context(|| format!("invalid rules in {}", path.display()))?;
    Ok(config)
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
