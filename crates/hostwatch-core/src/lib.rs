//! Core types and heuristic rules for hostwatch.
//!
//! This crate is pure: it never touches the operating system. Enumerators
//! (see `hostwatch-discovery`) hand it plain records and it hands back
//! findings.
//!
//! - **Types**: records for the three inspection domains, findings and
//!   scan reports
//! - **Rules**: the immutable [`RuleSet`] and one evaluator per domain
//! - **Errors**: rule configuration validation via [`RuleError`]
//!
//! # Example
//!
//! ```rust
//! use hostwatch_core::rules::{self, ProcessContext, RuleSet};
//! use hostwatch_core::ProcessRecord;
//!
//! let rules = RuleSet::default();
//! let snapshot = vec![ProcessRecord::new(4242, "svch0st.exe")
//!     .with_exe_path(r"C:\Users\bob\AppData\Local\Temp\svch0st.exe")];
//! let ctx = ProcessContext::from_snapshot(&snapshot);
//!
//! let findings = rules::processes::evaluate(&snapshot[0], &ctx, &rules.processes);
//! assert!(!findings.is_empty());
//! ```

mod error;
pub mod rules;
pub mod types;

pub use error::{Result, RuleError};
pub use rules::RuleSet;
pub use types::*;
