//! Output formatting for different formats.

mod pretty;

use anyhow::Result;
use clap::ValueEnum;
use hostwatch_core::{AccountRecord, ProcessRecord, ScanReport, StartupRecord};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use pretty::{print_pretty, render_pretty};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output, one row per finding
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// How a record type identifies itself in reports.
pub trait ReportRecord: Serialize {
    /// Identifying line shown above a flagged record's findings.
    fn heading(&self) -> String;

    /// Short identifier for the CSV `subject` column.
    fn subject(&self) -> String;

    /// Follow-up advice printed when anything was flagged.
    const TIP: Option<&'static str> = None;
}

impl ReportRecord for AccountRecord {
    fn heading(&self) -> String {
        format!("user [{}]", self.name)
    }

    fn subject(&self) -> String {
        self.name.clone()
    }
}

impl ReportRecord for ProcessRecord {
    fn heading(&self) -> String {
        format!(
            "PID [{}] name [{}] user: {}",
            self.pid,
            self.name,
            self.owner_display()
        )
    }

    fn subject(&self) -> String {
        format!("{} ({})", self.name, self.pid)
    }

    const TIP: Option<&'static str> = Some(
        "Investigate the processes above further, e.g. with Task Manager or an antivirus scanner.",
    );
}

impl ReportRecord for StartupRecord {
    fn heading(&self) -> String {
        format!("[{}] name: {} ({})", self.origin, self.name, self.location)
    }

    fn subject(&self) -> String {
        self.name.clone()
    }

    const TIP: Option<&'static str> = Some(
        "Investigate the entries above; disable unwanted ones with Task Manager or the registry editor.",
    );
}

/// A finished scan plus the listing shown in its enumeration summary.
#[derive(Debug)]
pub struct ScanOutput<R> {
    /// Findings and source outcomes
    pub report: ScanReport<R>,
    /// Lines listed under the enumeration count (e.g. account names)
    pub inventory: Vec<String>,
}

impl<R> ScanOutput<R> {
    /// Wrap a report with no inventory listing.
    pub const fn new(report: ScanReport<R>) -> Self {
        Self {
            report,
            inventory: Vec::new(),
        }
    }
}

/// One CSV row per finding.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    scan: String,
    subject: String,
    rule: &'a str,
    message: &'a str,
}

/// Append one row per finding of `report` to `writer`.
pub fn write_csv<R: ReportRecord, W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    report: &ScanReport<R>,
) -> Result<()> {
    for flagged in &report.flagged {
        for finding in &flagged.findings {
            writer.serialize(CsvRow {
                scan: report.scan.to_string(),
                subject: flagged.record.subject(),
                rule: finding.rule.as_str(),
                message: &finding.message,
            })?;
        }
    }
    Ok(())
}

/// Print a single scan in the requested format.
pub fn print_scan<R: ReportRecord>(format: OutputFormat, scan: &ScanOutput<R>) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scan.report)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&scan.report)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv_writer(std::io::stdout())?;
            write_csv(&mut writer, &scan.report)?;
            writer.flush()?;
        }
        OutputFormat::Pretty => print_pretty(scan)?,
    }
    Ok(())
}

/// Column names for CSV output.
const CSV_HEADER: [&str; 4] = ["scan", "subject", "rule", "message"];

/// CSV writer that has already emitted the header row, so an empty
/// report still yields a well-formed file.
pub fn csv_writer<W: std::io::Write>(inner: W) -> Result<csv::Writer<W>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(inner);
    writer.write_record(CSV_HEADER)?;
    Ok(writer)
}
