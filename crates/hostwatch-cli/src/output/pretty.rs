//! Human-readable report rendering.

use std::io::{self, Write};

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use super::{ReportRecord, ScanOutput};

const WIDTH: usize = 60;

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Entries")]
    records: usize,
    #[tabled(rename = "Status")]
    status: String,
}

fn heavy_rule() -> String {
    "=".repeat(WIDTH)
}

fn light_rule() -> String {
    "-".repeat(WIDTH)
}

/// Print a scan report to stdout.
pub fn print_pretty<R: ReportRecord>(scan: &ScanOutput<R>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_pretty(&mut out, scan)?;
    out.flush()
}

/// Write banner, enumeration summary, flagged records and the verdict.
pub fn render_pretty<R: ReportRecord, W: Write>(out: &mut W, scan: &ScanOutput<R>) -> io::Result<()> {
    let report = &scan.report;

    writeln!(out, "{}", heavy_rule().cyan())?;
    writeln!(
        out,
        "  {} {}",
        format!("Scanning for {}...", report.scan.title()).bold(),
        format!("({})", report.host).dimmed()
    )?;
    writeln!(out, "{}", heavy_rule().cyan())?;

    // Enumeration summary
    writeln!(
        out,
        "  Found {} {}.",
        report.enumerated.to_string().bright_white().bold(),
        report.scan.noun()
    )?;
    for line in &scan.inventory {
        writeln!(out, "    - {line}")?;
    }

    if report.sources.len() > 1 {
        let rows: Vec<SourceRow> = report
            .sources
            .iter()
            .map(|s| SourceRow {
                source: s.source.clone(),
                records: s.records,
                status: if s.is_failed() { "failed" } else { "ok" }.to_string(),
            })
            .collect();
        writeln!(out, "{}", Table::new(&rows).with(Style::rounded()))?;
    }

    for source in report.sources.iter().filter(|s| s.is_failed()) {
        writeln!(
            out,
            "  {} {}: {}",
            "warning:".yellow().bold(),
            source.source,
            source.error.as_deref().unwrap_or_default()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", light_rule())?;
    writeln!(out, "  {}", format!("Checking for {}...", report.scan.title()).bold())?;
    writeln!(out, "{}", light_rule())?;

    for flagged in &report.flagged {
        writeln!(
            out,
            "  {} {}",
            "!".red().bold(),
            flagged.record.heading().bright_white()
        )?;
        for finding in &flagged.findings {
            writeln!(out, "      {} {}", "-".red(), finding)?;
        }
    }

    if report.is_clean() {
        writeln!(out, "  {}", "No suspicious items found.".green())?;
    } else {
        writeln!(out)?;
        writeln!(
            out,
            "  {}",
            format!(
                "Flagged {} of {} {} ({} findings).",
                report.flagged.len(),
                report.enumerated,
                report.scan.noun(),
                report.finding_count()
            )
            .yellow()
            .bold()
        )?;
        if let Some(tip) = R::TIP {
            writeln!(out, "  {} {}", "Tip:".bold(), tip)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", heavy_rule().cyan())?;
    writeln!(out, "  {}", "Scan complete.".green())?;
    writeln!(out, "{}", heavy_rule().cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostwatch_core::{
        AccountRecord, Finding, ProcessRecord, RuleKind, ScanKind, ScanReport, SourceSummary,
        StartupRecord,
    };

    fn render<R: ReportRecord>(scan: &ScanOutput<R>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_pretty(&mut buf, scan).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_scan_reports_nothing_suspicious() {
        let mut report: ScanReport<AccountRecord> = ScanReport::new(ScanKind::Accounts, "WS-01");
        report.add_source(SourceSummary::ok("net user", 0));
        let out = render(&ScanOutput::new(report));

        assert!(out.contains("Scanning for backdoor user accounts... (WS-01)"));
        assert!(out.contains("Found 0 user accounts."));
        assert!(out.contains("No suspicious items found."));
        assert!(out.contains("Scan complete."));
        assert!(!out.lines().any(|l| l.trim_start().starts_with('!')));
        assert!(!out.contains("Flagged"));
        assert!(!out.contains("Tip:"));
    }

    #[test]
    fn flagged_records_list_their_findings() {
        let mut report = ScanReport::new(ScanKind::Processes, "WS-01");
        report.add_source(SourceSummary::ok("process table", 42));
        report.push(
            ProcessRecord::new(4242, "svch0st.exe").with_owner("bob"),
            vec![
                Finding::new(RuleKind::ProcessImpersonation, "impersonates svchost.exe"),
                Finding::new(
                    RuleKind::SystemNameOutsideSystemPath,
                    "system process name outside system path: Unknown",
                ),
            ],
        );
        let out = render(&ScanOutput::new(report));

        assert!(out.contains("  ! PID [4242] name [svch0st.exe] user: bob"));
        assert!(out.contains("      - impersonates svchost.exe"));
        assert!(out.contains("      - system process name outside system path: Unknown"));
        assert!(out.contains("Flagged 1 of 42 running processes (2 findings)."));
        assert!(out.contains("Tip: Investigate the processes above"));
        assert!(!out.contains("No suspicious items found."));
    }

    #[test]
    fn inventory_and_failed_sources_are_shown() {
        let mut report: ScanReport<StartupRecord> = ScanReport::new(ScanKind::Startup, "WS-01");
        report.add_source(SourceSummary::ok(r"HKCU\Software\Microsoft\Windows\CurrentVersion\Run", 2));
        report.add_source(SourceSummary::failed("Common Startup", "access denied"));
        let scan = ScanOutput {
            report,
            inventory: vec!["first".into(), "second".into()],
        };
        let out = render(&scan);

        assert!(out.contains("Found 2 startup entries."));
        assert!(out.contains("    - first\n    - second\n"));
        assert!(out.contains("failed"));
        assert!(out.contains("warning: Common Startup: access denied"));
    }
}
