//! Heuristic rule evaluation.
//!
//! Each domain has an immutable rule table and a pure `evaluate` function.
//! Rules inside one domain are evaluated independently: every rule runs
//! and findings accumulate in rule order.

pub mod accounts;
pub mod command_path;
pub mod paths;
pub mod processes;
pub mod startup;

use serde::{Deserialize, Serialize};

pub use accounts::AccountRules;
pub use command_path::extract_command_path;
pub use processes::{ProcessContext, ProcessRules};
pub use startup::StartupRules;

use crate::error::{Result, RuleError};

/// Rule tables for all three domains.
///
/// Built once at start-up (defaults merged with the config file) and
/// passed by reference into every evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Account rules
    #[serde(default)]
    pub accounts: AccountRules,
    /// Process rules
    #[serde(default)]
    pub processes: ProcessRules,
    /// Startup entry rules
    #[serde(default)]
    pub startup: StartupRules,
}

impl RuleSet {
    /// Reject tables that would make a rule fire on everything.
    pub fn validate(&self) -> Result<()> {
        self.processes.validate()?;
        self.startup.validate()?;
        Ok(())
    }
}

/// Fail if any entry of `table` is empty or whitespace.
pub(crate) fn check_patterns(table: &'static str, patterns: &[String]) -> Result<()> {
    if patterns.iter().any(|p| p.trim().is_empty()) {
        return Err(RuleError::EmptyPattern { table });
    }
    Ok(())
}

/// Convenience for building owned string tables from literals.
pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        assert_eq!(RuleSet::default().validate(), Ok(()));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let mut rules = RuleSet::default();
        rules.startup.malicious_keywords.push("  ".into());
        let err = rules.validate().unwrap_err();
        assert_eq!(err.table(), Some("startup.malicious_keywords"));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let mut rules = RuleSet::default();
        rules.processes.duplicate_threshold = 0;
        assert_eq!(rules.validate(), Err(RuleError::InvalidThreshold(0)));
        assert_eq!(RuleError::InvalidThreshold(0).table(), None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let rules: RuleSet =
            serde_json::from_str(r#"{"processes": {"duplicate_threshold": 5}}"#).unwrap();
        assert_eq!(rules.processes.duplicate_threshold, 5);
        assert_eq!(rules.processes.malicious_keywords, ProcessRules::default().malicious_keywords);
        assert_eq!(rules.accounts, AccountRules::default());
    }
}
