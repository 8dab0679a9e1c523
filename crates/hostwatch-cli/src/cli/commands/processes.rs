//! `hostwatch processes` - suspicious running processes.

use anyhow::Result;
use hostwatch_core::rules::{self, ProcessContext};
use hostwatch_core::{ProcessRecord, ScanKind, ScanReport};
use hostwatch_discovery::processes as discovery;

use super::Context;
use crate::education::Explain;
use crate::output::{print_scan, ScanOutput};

pub fn execute(ctx: &Context) -> Result<()> {
    ctx.print_explain(Explain::processes);

    let scan = collect(ctx)?;
    print_scan(ctx.output_format, &scan)
}

/// Snapshot the process table and evaluate it.
pub fn collect(ctx: &Context) -> Result<ScanOutput<ProcessRecord>> {
    let mut report = ScanReport::new(ScanKind::Processes, hostwatch_discovery::host_name());

    let (summary, processes) = discovery::list_processes().into_parts();
    if let Some(error) = &summary.error {
        anyhow::bail!("could not enumerate processes: {error}");
    }
    report.add_source(summary);

    // Duplicate counts come from the same snapshot that is evaluated
    let snapshot = ProcessContext::from_snapshot(&processes);
    for process in processes {
        let findings = rules::processes::evaluate(&process, &snapshot, &ctx.rules.processes);
        report.push(process, findings);
    }

    Ok(ScanOutput::new(report))
}
