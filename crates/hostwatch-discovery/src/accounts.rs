//! Local account enumeration via the Windows `net` tool.

use std::process::Command;

use hostwatch_core::AccountRecord;
use tracing::debug;

use crate::error::{DiscoveryError, Result};
use crate::source::SourceResult;

/// Source label used in reports.
pub const SOURCE: &str = "net user";

/// Group names that mark administrator membership in `net user <name>`
/// output, English and Simplified Chinese installs.
const ADMIN_GROUP_MARKERS: &[&str] = &["Administrators", "管理员"];

/// Trailer lines `net` prints after a listing.
const COMPLETION_MARKERS: &[&str] = &["The command completed", "命令成功完成"];

/// List local accounts.
pub fn list_accounts() -> SourceResult<AccountRecord> {
    if !cfg!(windows) {
        return SourceResult::failed(SOURCE, DiscoveryError::Unsupported(SOURCE.into()));
    }

    match run_net(&["user"]) {
        Ok(output) => {
            let accounts: Vec<_> = parse_user_listing(&output)
                .into_iter()
                .map(AccountRecord::new)
                .collect();
            debug!(count = accounts.len(), "enumerated accounts");
            SourceResult::ok(SOURCE, accounts)
        }
        Err(e) => SourceResult::failed(SOURCE, e),
    }
}

/// Ask the OS whether `name` belongs to the local administrators group.
///
/// One `net user <name>` call per account.
pub fn is_administrator(name: &str) -> Result<bool> {
    let output = run_net(&["user", name])?;
    Ok(has_admin_membership(&output))
}

/// Extract account names from `net user` output.
///
/// Names follow the dashed separator line, several per row, separated by
/// runs of two or more spaces.
#[must_use]
pub fn parse_user_listing(output: &str) -> Vec<String> {
    let mut users = Vec::new();
    let mut capture = false;

    for line in output.lines() {
        if line.contains("----------") {
            capture = true;
            continue;
        }
        let trimmed = line.trim();
        if !capture || trimmed.is_empty() {
            continue;
        }
        if COMPLETION_MARKERS.iter().any(|m| trimmed.starts_with(m)) {
            continue;
        }
        users.extend(
            trimmed
                .split("  ")
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        );
    }

    users
}

/// Returns true if `net user <name>` output lists an administrators group.
#[must_use]
pub fn has_admin_membership(output: &str) -> bool {
    ADMIN_GROUP_MARKERS.iter().any(|m| output.contains(m))
}

fn run_net(args: &[&str]) -> Result<String> {
    let output = Command::new("net")
        .args(args)
        .output()
        .map_err(|source| DiscoveryError::Spawn {
            program: "net".into(),
            source,
        })?;

    if !output.status.success() {
        return Err(DiscoveryError::CommandFailed {
            program: format!("net {}", args.join(" ")),
            status: output.status.to_string(),
            stderr: decode_console(&output.stderr).trim().to_string(),
        });
    }

    Ok(decode_console(&output.stdout))
}

/// Decode `net` console output.
///
/// Valid UTF-8 (a `chcp 65001` console) is taken as is. Anything else is
/// read as GBK, the zh-CN console code page, which leaves ASCII intact.
#[must_use]
pub fn decode_console(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => {
            let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
            if had_errors {
                debug!("console output is neither UTF-8 nor GBK");
            }
            text.into_owned()
        }
    }
}
