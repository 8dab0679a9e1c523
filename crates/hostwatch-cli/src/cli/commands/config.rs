//! `hostwatch config` - configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Path => show_path(ctx),
        ConfigCommands::Init { force } => init_config(ctx, force),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load_from(&ctx.config_path)?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        OutputFormat::Pretty | OutputFormat::Csv => {
            println!("{}", "Current Configuration:".bold());
            println!();

            let source = if ctx.config_path.exists() {
                ctx.config_path.display().to_string()
            } else {
                "(no file, defaults)".dimmed().to_string()
            };
            println!("  {} {}", "file:".bold(), source);
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!("  {} {}", "no_color:".bold(), config.no_color);
            println!(
                "  {} {}",
                "rules:".bold(),
                "see `hostwatch rules`".dimmed()
            );
        }
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists.\n\nPass --force to overwrite it.",
            path.display()
        );
    }

    Config::default().save_to(path)?;

    println!(
        "{} Wrote default configuration to {}",
        "Success:".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}
