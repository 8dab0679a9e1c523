//! `hostwatch rules` - print the effective rule tables.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::education::Explain;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context) -> Result<()> {
    ctx.print_explain(Explain::rules);

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ctx.rules)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&ctx.rules)?);
        }
        OutputFormat::Pretty | OutputFormat::Csv => {
            println!(
                "{} {}",
                "# Effective rules, config:".dimmed(),
                ctx.config_path.display().to_string().dimmed()
            );
            print!("{}", toml::to_string_pretty(&ctx.rules)?);
        }
    }

    Ok(())
}
