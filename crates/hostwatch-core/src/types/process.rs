use serde::{Deserialize, Serialize};

/// Placeholder shown when the executable path or owner could not be read
pub const UNKNOWN: &str = "Unknown";

/// A running process captured in one snapshot.
///
/// No identity persists across scans; pids are only meaningful inside the
/// snapshot that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process ID
    pub pid: u32,
    /// Image name (e.g. `svchost.exe`)
    pub name: String,
    /// Full path to the executable, if readable
    #[serde(default)]
    pub exe_path: Option<String>,
    /// Owning user, if readable
    #[serde(default)]
    pub owner: Option<String>,
}

impl ProcessRecord {
    /// Create a record with no path or owner information
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            exe_path: None,
            owner: None,
        }
    }

    /// Set the executable path
    #[must_use]
    pub fn with_exe_path(mut self, path: impl Into<String>) -> Self {
        self.exe_path = Some(path.into());
        self
    }

    /// Set the owning user
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Executable path for display, `Unknown` when absent
    #[must_use]
    pub fn exe_display(&self) -> &str {
        self.exe_path.as_deref().unwrap_or(UNKNOWN)
    }

    /// Owner for display, `Unknown` when absent
    #[must_use]
    pub fn owner_display(&self) -> &str {
        self.owner.as_deref().unwrap_or(UNKNOWN)
    }
}
