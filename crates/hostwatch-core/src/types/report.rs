use chrono::{DateTime, Utc};
use serde::Serialize;

use super::finding::Finding;

/// The three inspection domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    /// Local user accounts
    Accounts,
    /// Running processes
    Processes,
    /// Registry run keys and startup folders
    Startup,
}

impl ScanKind {
    /// Human-readable title for report banners
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Accounts => "backdoor user accounts",
            Self::Processes => "suspicious processes",
            Self::Startup => "suspicious startup entries",
        }
    }

    /// What one scanned item is called
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Accounts => "user accounts",
            Self::Processes => "running processes",
            Self::Startup => "startup entries",
        }
    }
}

impl std::fmt::Display for ScanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accounts => write!(f, "accounts"),
            Self::Processes => write!(f, "processes"),
            Self::Startup => write!(f, "startup"),
        }
    }
}

/// A record that triggered at least one rule
#[derive(Debug, Clone, Serialize)]
pub struct Flagged<R> {
    /// The record as enumerated
    pub record: R,
    /// Findings in rule evaluation order
    pub findings: Vec<Finding>,
}

/// Outcome of one enumeration source
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    /// Source label (registry key, folder, API)
    pub source: String,
    /// Records the source contributed
    pub records: usize,
    /// Failure text when the source could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceSummary {
    /// A source that was read successfully
    pub fn ok(source: impl Into<String>, records: usize) -> Self {
        Self {
            source: source.into(),
            records,
            error: None,
        }
    }

    /// A source that failed and contributed nothing
    pub fn failed(source: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            records: 0,
            error: Some(error.into()),
        }
    }

    /// Returns true if the source could not be read
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of one scan over one domain
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport<R> {
    /// Which domain was scanned
    pub scan: ScanKind,
    /// Host the scan ran on
    pub host: String,
    /// When enumeration finished
    pub collected_at: DateTime<Utc>,
    /// Total records enumerated across all sources
    pub enumerated: usize,
    /// Per-source outcomes
    pub sources: Vec<SourceSummary>,
    /// Records with findings, in enumeration order
    pub flagged: Vec<Flagged<R>>,
}

impl<R> ScanReport<R> {
    /// Start an empty report
    pub fn new(scan: ScanKind, host: impl Into<String>) -> Self {
        Self {
            scan,
            host: host.into(),
            collected_at: Utc::now(),
            enumerated: 0,
            sources: Vec::new(),
            flagged: Vec::new(),
        }
    }

    /// Record a source outcome
    pub fn add_source(&mut self, summary: SourceSummary) {
        self.enumerated += summary.records;
        self.sources.push(summary);
    }

    /// Keep `record` if it produced any findings
    pub fn push(&mut self, record: R, findings: Vec<Finding>) {
        if !findings.is_empty() {
            self.flagged.push(Flagged { record, findings });
        }
    }

    /// Returns true if nothing was flagged
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Total findings across all flagged records
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.flagged.iter().map(|f| f.findings.len()).sum()
    }

    /// Returns true if every source failed
    #[must_use]
    pub fn all_sources_failed(&self) -> bool {
        !self.sources.is_empty() && self.sources.iter().all(SourceSummary::is_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountRecord, RuleKind};

    #[test]
    fn empty_report_is_clean() {
        let report: ScanReport<AccountRecord> = ScanReport::new(ScanKind::Accounts, "host");
        assert!(report.is_clean());
        assert_eq!(report.enumerated, 0);
        assert_eq!(report.finding_count(), 0);
        assert!(!report.all_sources_failed());
    }

    #[test]
    fn push_keeps_only_flagged_records() {
        let mut report = ScanReport::new(ScanKind::Accounts, "host");
        report.add_source(SourceSummary::ok("net user", 2));
        report.push(AccountRecord::new("alice"), Vec::new());
        report.push(
            AccountRecord::new("bob$"),
            vec![Finding::new(RuleKind::HiddenAccount, "hidden")],
        );

        assert_eq!(report.enumerated, 2);
        assert_eq!(report.flagged.len(), 1);
        assert_eq!(report.flagged[0].record.name, "bob$");
        assert_eq!(report.finding_count(), 1);
    }

    #[test]
    fn failed_sources_are_tracked() {
        let mut report: ScanReport<AccountRecord> = ScanReport::new(ScanKind::Startup, "host");
        report.add_source(SourceSummary::failed("HKLM\\Run", "access denied"));
        assert!(report.all_sources_failed());

        report.add_source(SourceSummary::ok("User Startup", 0));
        assert!(!report.all_sources_failed());
        assert_eq!(report.enumerated, 0);
    }

    #[test]
    fn report_serializes_without_empty_errors() {
        let mut report: ScanReport<AccountRecord> = ScanReport::new(ScanKind::Accounts, "host");
        report.add_source(SourceSummary::ok("net user", 1));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scan"], "accounts");
        assert!(json["sources"][0].get("error").is_none());
    }
}
