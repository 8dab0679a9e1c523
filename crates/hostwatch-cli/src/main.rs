//! hostwatch - point-in-time host inspection
//!
//! Looks for backdoor accounts, suspicious processes and suspicious
//! auto-start entries, and prints what it finds.

use anyhow::Result;

fn main() -> Result<()> {
    hostwatch_cli::run()
}
