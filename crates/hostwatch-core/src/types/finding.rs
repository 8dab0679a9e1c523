use serde::{Deserialize, Serialize};

/// Which heuristic produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Account name ends with `$`
    HiddenAccount,
    /// Non-builtin member of the administrators group
    CustomAdministrator,
    /// Process name is a known misspelling of a system process
    ProcessImpersonation,
    /// Name, path or command contains a malicious keyword
    MaliciousKeyword,
    /// Executable lives under a temp/cache/download style directory
    HighRiskPath,
    /// System process name running from outside the system directories
    SystemNameOutsideSystemPath,
    /// Too many processes share a name
    DuplicateInstances,
    /// Startup entry runs from a high-risk, untrusted location
    UntrustedPath,
    /// Startup entry name mimics a system component
    StartupImpersonation,
}

impl RuleKind {
    /// Short stable identifier, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HiddenAccount => "hidden_account",
            Self::CustomAdministrator => "custom_administrator",
            Self::ProcessImpersonation => "process_impersonation",
            Self::MaliciousKeyword => "malicious_keyword",
            Self::HighRiskPath => "high_risk_path",
            Self::SystemNameOutsideSystemPath => "system_name_outside_system_path",
            Self::DuplicateInstances => "duplicate_instances",
            Self::UntrustedPath => "untrusted_path",
            Self::StartupImpersonation => "startup_impersonation",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One triggered rule attached to a scanned record.
///
/// Every finding carries equal weight; there is no severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule that fired
    pub rule: RuleKind,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// Create a finding
    pub fn new(rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
