//! `hostwatch startup` - registry run keys and startup folders.

use anyhow::Result;
use hostwatch_core::{rules, ScanKind, ScanReport, StartupRecord};
use hostwatch_discovery::startup as discovery;

use super::Context;
use crate::education::Explain;
use crate::output::{print_scan, ScanOutput};

pub fn execute(ctx: &Context) -> Result<()> {
    ctx.require_elevation("startup")?;

    ctx.print_explain(Explain::startup);

    let scan = collect(ctx)?;
    print_scan(ctx.output_format, &scan)
}

/// Read every auto-start source and evaluate the entries found.
///
/// Unreadable sources are kept in the report; the scan only fails when
/// none of them could be read.
pub fn collect(ctx: &Context) -> Result<ScanOutput<StartupRecord>> {
    let mut report = ScanReport::new(ScanKind::Startup, hostwatch_discovery::host_name());

    let sources = discovery::list_registry_entries()
        .into_iter()
        .chain(discovery::list_folder_entries());

    let mut entries = Vec::new();
    for source in sources {
        let (summary, records) = source.into_parts();
        report.add_source(summary);
        entries.extend(records);
    }

    if report.all_sources_failed() {
        anyhow::bail!("could not read any startup location");
    }

    for entry in entries {
        let findings = rules::startup::evaluate(&entry, &ctx.rules.startup);
        report.push(entry, findings);
    }

    Ok(ScanOutput::new(report))
}
