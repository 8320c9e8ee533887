//! Error types for coffee-roster.
//!
//! Every fallible operation in the crate returns [`RosterError`] through the
//! [`Result`] alias. Generation, statistics and the CSV codec share the one
//! enum so callers can propagate with `?` across the whole pipeline.

use thiserror::Error;

/// The main error type for coffee-roster.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A statistic was requested over an empty sample.
    #[error("Cannot compute {operation} of an empty sample")]
    EmptyInput {
        /// Name of the statistic that was requested
        operation: &'static str,
    },

    /// More distinct mobile suffixes were requested than the suffix space holds.
    #[error("Requested {requested} distinct values but only {available} are available")]
    InsufficientSpace { requested: usize, available: usize },

    /// Batch assembly received field columns of differing lengths.
    #[error(
        "Column length mismatch: ids={ids}, names={names}, mobiles={mobiles}, frequencies={frequencies}"
    )]
    LengthMismatch {
        ids: usize,
        names: usize,
        mobiles: usize,
        frequencies: usize,
    },

    /// A persisted row could not be decoded.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source document
        line: usize,
        /// Detailed error message
        message: String,
    },

    /// Error related to generator configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A type alias for `Result<T, RosterError>`.
///
/// # Examples
///
/// ```rust
/// use coffee_roster::error::Result;
///
/// fn sample_size(values: &[i64]) -> Result<usize> {
///     Ok(values.len())
/// }
/// # assert_eq!(sample_size(&[1, 2]).unwrap(), 2);
/// ```
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Creates a new parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns true if this error came from an empty statistics sample.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
