use serde::{Deserialize, Serialize};

/// Where an auto-start entry was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupOrigin {
    /// A value under a `Run` or `RunOnce` registry key
    Registry,
    /// A file directly inside a startup folder
    StartupFolder,
}

impl std::fmt::Display for StartupOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry => write!(f, "Registry"),
            Self::StartupFolder => write!(f, "Startup Folder"),
        }
    }
}

/// A single auto-start entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupRecord {
    /// Which mechanism registers the entry
    pub origin: StartupOrigin,
    /// Registry value name or file name
    pub name: String,
    /// Registry value data or full file path. May carry quotes and arguments.
    pub command: String,
    /// Registry key path or startup folder label
    pub location: String,
}

impl StartupRecord {
    /// Create a registry-sourced entry
    pub fn registry(
        name: impl Into<String>,
        command: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            origin: StartupOrigin::Registry,
            name: name.into(),
            command: command.into(),
            location: location.into(),
        }
    }

    /// Create a startup-folder entry
    pub fn folder(
        name: impl Into<String>,
        command: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            origin: StartupOrigin::StartupFolder,
            name: name.into(),
            command: command.into(),
            location: location.into(),
        }
    }
}
