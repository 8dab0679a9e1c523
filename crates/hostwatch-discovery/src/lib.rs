//! # hostwatch-discovery
//!
//! Enumeration of the OS objects hostwatch inspects. Every function here
//! is read-only: it lists, it never changes anything.
//!
//! ## Sources
//!
//! - **Accounts**: `net user` listing, plus one `net user <name>` per
//!   account for administrator membership
//! - **Processes**: the process table via `sysinfo`
//! - **Startup entries**: `Run`/`RunOnce` values under HKCU and HKLM, and
//!   files directly inside the user and common startup folders
//!
//! Each source returns a [`SourceResult`], so a failed source is reported
//! as a failure and not mistaken for an empty one.

pub mod accounts;
pub mod error;
pub mod privilege;
pub mod processes;
pub mod source;
pub mod startup;

pub use error::{DiscoveryError, Result};
pub use source::SourceResult;

/// Name of the machine being scanned.
///
/// Falls back to `unknown` when the hostname cannot be read.
pub fn host_name() -> String {
    hostname::get().map_or_else(
        |_| "unknown".to_string(),
        |h| h.to_string_lossy().into_owned(),
    )
}
