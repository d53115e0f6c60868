//! Error types for pattern analysis and dataset handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum PatternError {
    /// Caller supplied an argument outside the accepted domain
    ///
    /// Raised for a non-positive pattern length or an unrecognised sort direction.
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Requested column is not part of the dataset header
    ColumnNotFound {
        /// Column name that was requested
        column: String,
        /// Column names the dataset does provide
        available: Vec<String>,
    },

    /// A CSV record has more fields than the header
    MalformedRecord {
        /// Dataset file containing the record
        path: PathBuf,
        /// One-based line on which the record starts
        line: usize,
        /// Number of header fields
        expected: usize,
        /// Number of fields found in the record
        found: usize,
    },

    /// Dataset could not be interpreted as a table
    DatasetLoad {
        /// Dataset file that failed to load
        path: PathBuf,
        /// Description of what's wrong with the content
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::ColumnNotFound { column, available } => {
                write!(
                    f,
                    "Column '{column}' not found (available: {})",
                    available.join(", ")
                )
            }
            Self::MalformedRecord {
                path,
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Malformed record in '{}' at line {line}: expected {expected} fields, saw {found}",
                    path.display()
                )
            }
            Self::DatasetLoad { path, reason } => {
                write!(f, "Failed to load dataset '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a dataset load error for content that isn't a usable table
pub fn dataset_error(path: impl Into<PathBuf>, reason: &impl ToString) -> PatternError {
    PatternError::DatasetLoad {
        path: path.into(),
        reason: reason.to_string(),
    }
}

