//! Process rules: impersonation, keywords, risky locations and duplicates.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::paths::{contains_any, contains_ci, eq_ci, is_under_any, matches_in};
use super::{check_patterns, owned};
use crate::error::{Result, RuleError};
use crate::types::{Finding, ProcessRecord, RuleKind};

/// Process rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRules {
    /// Case-insensitive substrings matched against name and path
    #[serde(default = "default_keywords")]
    pub malicious_keywords: Vec<String>,

    /// Directories (or files) system processes are expected to run from
    #[serde(default = "default_system_paths")]
    pub system_path_prefixes: Vec<String>,

    /// Case-insensitive path fragments attackers stage binaries in
    #[serde(default = "default_high_risk")]
    pub high_risk_paths: Vec<String>,

    /// System names checked for location besides the impersonation keys
    #[serde(default = "default_extra_system_names")]
    pub extra_system_names: Vec<String>,

    /// More instances than this sharing one name is anomalous
    #[serde(default = "default_duplicate_threshold")]
    pub duplicate_threshold: usize,

    /// Trusted process name -> known misspellings
    #[serde(default = "default_impersonation")]
    pub impersonation: BTreeMap<String, Vec<String>>,
}

impl Default for ProcessRules {
    fn default() -> Self {
        Self {
            malicious_keywords: default_keywords(),
            system_path_prefixes: default_system_paths(),
            high_risk_paths: default_high_risk(),
            extra_system_names: default_extra_system_names(),
            duplicate_threshold: default_duplicate_threshold(),
            impersonation: default_impersonation(),
        }
    }
}

impl ProcessRules {
    pub(crate) fn validate(&self) -> Result<()> {
        check_patterns("processes.malicious_keywords", &self.malicious_keywords)?;
        check_patterns("processes.high_risk_paths", &self.high_risk_paths)?;
        check_patterns("processes.system_path_prefixes", &self.system_path_prefixes)?;
        if self.duplicate_threshold == 0 {
            return Err(RuleError::InvalidThreshold(0));
        }
        for (trusted, variants) in &self.impersonation {
            if variants.is_empty() {
                return Err(RuleError::EmptyImpersonation(trusted.clone()));
            }
            check_patterns("processes.impersonation", variants)?;
        }
        Ok(())
    }

    /// Trusted names `name` is a known misspelling of.
    pub fn impersonated_by<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.impersonation
            .iter()
            .filter(move |(_, variants)| variants.iter().any(|v| eq_ci(v, name)))
            .map(|(trusted, _)| trusted.as_str())
    }

    /// Returns true if `name` belongs to a process expected under the system directories.
    #[must_use]
    pub fn is_system_name(&self, name: &str) -> bool {
        self.impersonation.keys().any(|k| eq_ci(k, name))
            || self.extra_system_names.iter().any(|n| eq_ci(n, name))
    }

    /// Returns true if `path` is in a staging location.
    #[must_use]
    pub fn is_high_risk(&self, path: Option<&str>) -> bool {
        path.is_some_and(|p| contains_any(p, &self.high_risk_paths))
    }

    /// Returns true if `path` lies under a trusted system prefix.
    #[must_use]
    pub fn is_system_path(&self, path: Option<&str>) -> bool {
        path.is_some_and(|p| is_under_any(p, &self.system_path_prefixes))
    }
}

/// Snapshot-wide aggregates, computed once before per-record evaluation.
#[derive(Debug, Clone, Default)]
pub struct ProcessContext {
    name_counts: HashMap<String, usize>,
}

impl ProcessContext {
    /// Count how many processes share each exact name.
    #[must_use]
    pub fn from_snapshot(processes: &[ProcessRecord]) -> Self {
        let mut name_counts = HashMap::new();
        for proc in processes {
            *name_counts.entry(proc.name.clone()).or_insert(0) += 1;
        }
        Self { name_counts }
    }

    /// Number of processes named exactly `name`.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.name_counts.get(name).copied().unwrap_or(0)
    }
}

/// Evaluate one process against the rule table.
#[must_use]
pub fn evaluate(record: &ProcessRecord, ctx: &ProcessContext, rules: &ProcessRules) -> Vec<Finding> {
    let mut findings = Vec::new();
    let path = record.exe_path.as_deref();

    for trusted in rules.impersonated_by(&record.name) {
        findings.push(Finding::new(
            RuleKind::ProcessImpersonation,
            format!("impersonates {trusted}"),
        ));
    }

    let text = match path {
        Some(p) => format!("{} {p}", record.name),
        None => record.name.clone(),
    };
    let keywords = matches_in(&text, &rules.malicious_keywords);
    if !keywords.is_empty() {
        findings.push(Finding::new(
            RuleKind::MaliciousKeyword,
            format!("contains malicious keywords: {}", keywords.join(", ")),
        ));
    }

    let high_risk = rules.is_high_risk(path);
    if high_risk {
        findings.push(Finding::new(
            RuleKind::HighRiskPath,
            format!("running from high-risk path: {}", record.exe_display()),
        ));
    }

    if rules.is_system_name(&record.name) && !rules.is_system_path(path) {
        findings.push(Finding::new(
            RuleKind::SystemNameOutsideSystemPath,
            format!("system process name outside system path: {}", record.exe_display()),
        ));
    }

    let count = ctx.count(&record.name);
    if count > rules.duplicate_threshold && (high_risk || contains_ci(&record.name, "python")) {
        findings.push(Finding::new(
            RuleKind::DuplicateInstances,
            format!("{count} duplicate instances of this name, possibly anomalous"),
        ));
    }

    findings
}

fn default_keywords() -> Vec<String> {
    owned(&[
        "hack", "keylog", "spy", "remote", "vnc", "rat", "trojan", "meterpreter", "cobalt",
        "shell", "reverse", "backdoor",
    ])
}

fn default_system_paths() -> Vec<String> {
    owned(&[
        r"C:\Windows\System32",
        r"C:\Windows\SysWOW64",
        r"C:\Windows\Explorer.EXE",
        r"\??\C:\Windows\System32",
    ])
}

fn default_impersonation() -> BTreeMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 6] = [
        ("svchost.exe", &["svch0st.exe", "scvhost.exe", "svchosts.exe"]),
        ("lsass.exe", &["lsasss.exe", "lssas.exe"]),
        ("winlogon.exe", &["winlogonn.exe", "winlogin.exe"]),
        ("explorer.exe", &["explorerr.exe", "explorerx.exe", "explorer_.exe"]),
        ("csrss.exe", &["csrsss.exe", "csrss1.exe"]),
        ("smss.exe", &["smsss.exe", "sms.exe"]),
    ];
    table
        .into_iter()
        .map(|(trusted, variants)| (trusted.to_string(), owned(variants)))
        .collect()
}

fn default_high_risk() -> Vec<String> {
    owned(&[
        "Temp",
        r"AppData\Local\Temp",
        "Downloads",
        "Desktop",
        r"\AppData\Roaming\",
        r"\Local\Programs\",
        ".cache",
    ])
}

fn default_extra_system_names() -> Vec<String> {
    owned(&["dllhost.exe"])
}

const fn default_duplicate_threshold() -> usize {
    3
}
