//! Account rules: hidden accounts and unexpected administrators.

use serde::{Deserialize, Serialize};

use super::owned;
use crate::types::{AccountRecord, Finding, RuleKind};

/// Account rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRules {
    /// Accounts the OS creates itself. Localized installs rename these,
    /// so the list is configurable.
    #[serde(default = "default_builtin_admins")]
    pub builtin_admins: Vec<String>,
}

impl Default for AccountRules {
    fn default() -> Self {
        Self {
            builtin_admins: default_builtin_admins(),
        }
    }
}

impl AccountRules {
    /// Exact, case-sensitive membership in the builtin set.
    #[must_use]
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtin_admins.iter().any(|b| b == name)
    }
}

fn default_builtin_admins() -> Vec<String> {
    owned(&["Administrator", "Guest", "DefaultAccount", "WDAGUtilityAccount"])
}

/// Returns true for names the `net` tooling hides from casual listings.
#[must_use]
pub fn is_hidden(name: &str) -> bool {
    name.ends_with('$')
}

/// Evaluate one account.
///
/// `is_administrator` comes from the OS (one membership query per account).
#[must_use]
pub fn evaluate(record: &AccountRecord, is_administrator: bool, rules: &AccountRules) -> Vec<Finding> {
    let mut findings = Vec::new();

    if is_hidden(&record.name) {
        findings.push(Finding::new(
            RuleKind::HiddenAccount,
            "hidden account (name ends with `$`)",
        ));
    }

    if is_administrator && !rules.is_builtin(&record.name) {
        findings.push(Finding::new(
            RuleKind::CustomAdministrator,
            "custom administrator account",
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(findings: &[Finding]) -> Vec<RuleKind> {
        findings.iter().map(|f| f.rule).collect()
    }

    #[test]
    fn hidden_account_fires_only_on_trailing_dollar() {
        let rules = AccountRules::default();
        for name in ["backup$", "$", "a$b$"] {
            let findings = evaluate(&AccountRecord::new(name), false, &rules);
            assert_eq!(kinds(&findings), vec![RuleKind::HiddenAccount], "{name}");
        }
        for name in ["alice", "$admin", "svc$x", ""] {
            assert!(evaluate(&AccountRecord::new(name), false, &rules).is_empty(), "{name}");
        }
    }

    #[test]
    fn builtin_admins_never_fire_admin_rule() {
        let rules = AccountRules::default();
        for name in &rules.builtin_admins {
            assert!(evaluate(&AccountRecord::new(name.as_str()), true, &rules).is_empty());
        }
    }

    #[test]
    fn builtin_match_is_case_sensitive() {
        let rules = AccountRules::default();
        let findings = evaluate(&AccountRecord::new("administrator"), true, &rules);
        assert_eq!(kinds(&findings), vec![RuleKind::CustomAdministrator]);
    }

    #[test]
    fn hidden_admin_gets_both_findings() {
        let rules = AccountRules::default();
        let findings = evaluate(&AccountRecord::new("support$"), true, &rules);
        assert_eq!(
            kinds(&findings),
            vec![RuleKind::HiddenAccount, RuleKind::CustomAdministrator]
        );
    }

    #[test]
    fn localized_builtin_set_is_respected() {
        let rules = AccountRules {
            builtin_admins: vec!["Administrateur".into(), "Invité".into()],
        };
        assert!(evaluate(&AccountRecord::new("Administrateur"), true, &rules).is_empty());
        assert_eq!(
            kinds(&evaluate(&AccountRecord::new("Administrator"), true, &rules)),
            vec![RuleKind::CustomAdministrator]
        );
    }

    #[test]
    fn non_admin_regular_account_is_clean() {
        let rules = AccountRules::default();
        assert!(evaluate(&AccountRecord::new("bob"), false, &rules).is_empty());
    }
}
