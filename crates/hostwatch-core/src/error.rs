use thiserror::Error;

/// Result type alias for rule configuration operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Errors raised when a rule configuration cannot be used
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// An empty pattern would match every record
    #[error("empty pattern in {table}")]
    EmptyPattern {
        /// Name of the table holding the empty entry
        table: &'static str,
    },

    /// Duplicate threshold must leave room for at least one legitimate instance
    #[error("duplicate threshold must be at least 1, got {0}")]
    InvalidThreshold(usize),

    /// A trusted name was mapped to no variants at all
    #[error("impersonation entry for {0} has no variants")]
    EmptyImpersonation(String),
}

impl RuleError {
    /// Returns the table name for pattern errors
    #[must_use]
    pub const fn table(&self) -> Option<&'static str> {
        match self {
            Self::EmptyPattern { table } => Some(table),
            _ => None,
        }
    }
}
