//! Error types for OS enumeration.

use thiserror::Error;

/// Result type alias for enumeration operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Errors that can occur while enumerating OS objects.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// An external command could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// An external command ran but reported failure.
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// A registry key could not be opened or read.
    #[error("registry error at {key}: {source}")]
    Registry {
        key: String,
        source: std::io::Error,
    },

    /// Filesystem access failed.
    #[error("io error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The source does not exist on this platform.
    #[error("{0} is not available on this platform")]
    Unsupported(String),
}

impl DiscoveryError {
    /// Build an `Io` error for `path`.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the failure was an access check.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Spawn { source, .. } | Self::Registry { source, .. } | Self::Io { source, .. } => {
                source.kind() == std::io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}
