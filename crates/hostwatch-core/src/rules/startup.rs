//! Startup entry rules.

use serde::{Deserialize, Serialize};

use super::command_path::extract_command_path;
use super::paths::{contains_any, is_under_any, matches_in};
use super::{check_patterns, owned};
use crate::error::Result;
use crate::types::{Finding, RuleKind, StartupRecord};

/// Startup rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupRules {
    /// Case-insensitive substrings matched against the full command
    #[serde(default = "default_keywords")]
    pub malicious_keywords: Vec<String>,

    /// Case-insensitive path fragments attackers stage binaries in
    #[serde(default = "default_high_risk")]
    pub high_risk_paths: Vec<String>,

    /// Install locations regarded as trusted
    #[serde(default = "default_trusted")]
    pub trusted_path_prefixes: Vec<String>,

    /// System component stems an entry name should not mimic
    #[serde(default = "default_stems")]
    pub impersonation_stems: Vec<String>,
}

impl Default for StartupRules {
    fn default() -> Self {
        Self {
            malicious_keywords: default_keywords(),
            high_risk_paths: default_high_risk(),
            trusted_path_prefixes: default_trusted(),
            impersonation_stems: default_stems(),
        }
    }
}

impl StartupRules {
    pub(crate) fn validate(&self) -> Result<()> {
        check_patterns("startup.malicious_keywords", &self.malicious_keywords)?;
        check_patterns("startup.high_risk_paths", &self.high_risk_paths)?;
        check_patterns("startup.trusted_path_prefixes", &self.trusted_path_prefixes)?;
        check_patterns("startup.impersonation_stems", &self.impersonation_stems)?;
        Ok(())
    }

    /// Returns true if the entry name contains a stem plus a digit or `_`.
    #[must_use]
    pub fn mimics_system_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        let decorated = name.chars().any(|c| c.is_ascii_digit() || c == '_');
        decorated
            && self
                .impersonation_stems
                .iter()
                .any(|stem| name.contains(&stem.to_lowercase()))
    }
}

/// Evaluate one startup entry.
#[must_use]
pub fn evaluate(record: &StartupRecord, rules: &StartupRules) -> Vec<Finding> {
    let mut findings = Vec::new();
    let path = extract_command_path(&record.command);

    let high_risk = contains_any(path, &rules.high_risk_paths);
    if high_risk {
        findings.push(Finding::new(
            RuleKind::HighRiskPath,
            format!("located in high-risk path: {path}"),
        ));
    }

    if high_risk && !is_under_any(path, &rules.trusted_path_prefixes) {
        findings.push(Finding::new(
            RuleKind::UntrustedPath,
            format!("running from untrusted path: {path}"),
        ));
    }

    let keywords = matches_in(&record.command, &rules.malicious_keywords);
    if !keywords.is_empty() {
        findings.push(Finding::new(
            RuleKind::MaliciousKeyword,
            format!("contains malicious keywords: {}", keywords.join(", ")),
        ));
    }

    if rules.mimics_system_name(&record.name) {
        findings.push(Finding::new(
            RuleKind::StartupImpersonation,
            format!("impersonates a system startup name: {}", record.name),
        ));
    }

    findings
}

fn default_keywords() -> Vec<String> {
    owned(&[
        "hack", "keylog", "spy", "remote", "rat", "trojan", "backdoor", "shell", "vnc", "miner",
    ])
}

fn default_high_risk() -> Vec<String> {
    owned(&[
        "Temp",
        r"AppData\Local\Temp",
        r"AppData\Roaming",
        "Downloads",
        "Desktop",
        r"\Local\Programs\",
        ".cache",
    ])
}

fn default_trusted() -> Vec<String> {
    owned(&[
        r"C:\Windows",
        r"C:\Program Files",
        r"C:\Program Files (x86)",
        r"\??\C:\Windows",
    ])
}

fn default_stems() -> Vec<String> {
    owned(&["svchost", "explorer", "winlogon", "lsass", "csrss", "smss"])
}
