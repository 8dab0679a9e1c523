//! `hostwatch accounts` - hidden and unexpected administrator accounts.

use anyhow::Result;
use hostwatch_core::{rules, AccountRecord, ScanKind, ScanReport};
use hostwatch_discovery::accounts as discovery;
use tracing::{debug, warn};

use super::Context;
use crate::education::Explain;
use crate::output::{print_scan, ScanOutput};

pub fn execute(ctx: &Context) -> Result<()> {
    ctx.require_elevation("accounts")?;

    ctx.print_explain(Explain::accounts);

    let scan = collect(ctx)?;
    print_scan(ctx.output_format, &scan)
}

/// Enumerate accounts and evaluate every one of them.
pub fn collect(ctx: &Context) -> Result<ScanOutput<AccountRecord>> {
    let mut report = ScanReport::new(ScanKind::Accounts, hostwatch_discovery::host_name());

    let (summary, accounts) = discovery::list_accounts().into_parts();
    if let Some(error) = &summary.error {
        anyhow::bail!("could not enumerate user accounts: {error}");
    }
    report.add_source(summary);

    let inventory = accounts.iter().map(|a| a.name.clone()).collect();

    for account in accounts {
        let is_admin = discovery::is_administrator(&account.name).unwrap_or_else(|e| {
            warn!(account = %account.name, error = %e, "membership query failed");
            false
        });
        debug!(account = %account.name, is_admin, "checked account");

        let findings = rules::accounts::evaluate(&account, is_admin, &ctx.rules.accounts);
        report.push(account, findings);
    }

    Ok(ScanOutput { report, inventory })
}
