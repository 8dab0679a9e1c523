//! Per-source enumeration outcomes.

use hostwatch_core::SourceSummary;
use tracing::warn;

use crate::error::DiscoveryError;

/// What one enumeration source produced.
///
/// Keeps "read successfully, found nothing" apart from "could not be
/// read", so callers can report partial data and surface warnings.
#[derive(Debug)]
pub struct SourceResult<T> {
    /// Source label (registry key, folder, API)
    pub source: String,
    /// Records, or the reason the source contributed none
    pub outcome: Result<Vec<T>, DiscoveryError>,
}

impl<T> SourceResult<T> {
    /// A source that was read successfully.
    pub fn ok(source: impl Into<String>, records: Vec<T>) -> Self {
        Self {
            source: source.into(),
            outcome: Ok(records),
        }
    }

    /// A source that failed.
    pub fn failed(source: impl Into<String>, error: DiscoveryError) -> Self {
        Self {
            source: source.into(),
            outcome: Err(error),
        }
    }

    /// Returns true if the source could not be read.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.outcome.is_err()
    }

    /// Split into a report summary and the records, warning on failure.
    pub fn into_parts(self) -> (SourceSummary, Vec<T>) {
        match self.outcome {
            Ok(records) => (SourceSummary::ok(self.source, records.len()), records),
            Err(e) => {
                if e.is_permission_denied() {
                    warn!(source = %self.source, "access denied; rerun from an elevated shell");
                } else {
                    warn!(source = %self.source, error = %e, "enumeration source failed");
                }
                (SourceSummary::failed(self.source, e.to_string()), Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_failed_are_distinct() {
        let empty: SourceResult<u32> = SourceResult::ok("HKCU\\Run", Vec::new());
        let failed: SourceResult<u32> =
            SourceResult::failed("HKLM\\Run", DiscoveryError::Unsupported("registry".into()));

        assert!(!empty.is_failed());
        assert!(failed.is_failed());

        let (summary, records) = empty.into_parts();
        assert!(records.is_empty());
        assert!(!summary.is_failed());

        let (summary, records) = failed.into_parts();
        assert!(records.is_empty());
        assert_eq!(
            summary.error.as_deref(),
            Some("registry is not available on this platform")
        );
    }

    #[test]
    fn permission_errors_are_recognised() {
        let denied = DiscoveryError::io(
            "C:\\ProgramData",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(denied.is_permission_denied());
        assert!(!DiscoveryError::Unsupported("net".into()).is_permission_denied());
    }
}
