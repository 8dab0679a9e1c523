//! `hostwatch all` - every scan in sequence.

use anyhow::Result;
use colored::Colorize;
use hostwatch_core::{AccountRecord, ProcessRecord, ScanReport, StartupRecord};
use serde::Serialize;

use super::{accounts, processes, startup, Context};
use crate::education::Explain;
use crate::output::{csv_writer, print_pretty, write_csv, OutputFormat};

/// Combined machine-readable report. A scan that failed is `null` and
/// its reason is listed under `errors`.
#[derive(Debug, Serialize)]
struct FullReport<'a> {
    accounts: Option<&'a ScanReport<AccountRecord>>,
    processes: Option<&'a ScanReport<ProcessRecord>>,
    startup: Option<&'a ScanReport<StartupRecord>>,
    errors: Vec<String>,
}

pub fn execute(ctx: &Context) -> Result<()> {
    ctx.require_elevation("all")?;

    ctx.print_explain(Explain::all);

    // One failed scan does not stop the others
    let accounts = accounts::collect(ctx);
    let processes = processes::collect(ctx);
    let startup = startup::collect(ctx);

    let errors: Vec<String> = [
        accounts.as_ref().err(),
        processes.as_ref().err(),
        startup.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    .map(ToString::to_string)
    .collect();

    let accounts = accounts.ok();
    let processes = processes.ok();
    let startup = startup.ok();

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let full = FullReport {
                accounts: accounts.as_ref().map(|s| &s.report),
                processes: processes.as_ref().map(|s| &s.report),
                startup: startup.as_ref().map(|s| &s.report),
                errors: errors.clone(),
            };
            if ctx.output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&full)?);
            } else {
                print!("{}", serde_yaml::to_string(&full)?);
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv_writer(std::io::stdout())?;
            if let Some(scan) = &accounts {
                write_csv(&mut writer, &scan.report)?;
            }
            if let Some(scan) = &processes {
                write_csv(&mut writer, &scan.report)?;
            }
            if let Some(scan) = &startup {
                write_csv(&mut writer, &scan.report)?;
            }
            writer.flush()?;
        }
        OutputFormat::Pretty => {
            if let Some(scan) = &accounts {
                print_pretty(scan)?;
                println!();
            }
            if let Some(scan) = &processes {
                print_pretty(scan)?;
                println!();
            }
            if let Some(scan) = &startup {
                print_pretty(scan)?;
            }
            for error in &errors {
                eprintln!("{} {}", "Error:".red().bold(), error);
            }
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("{} of 3 scans failed", errors.len());
    }

    Ok(())
}
