//! Error types and path context for partitioning operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all partitioning operations
///
/// Infeasibility is not an error: an odd sum or an unreachable half-sum is
/// reported through [`PartitionStatus`](crate::algorithm::partition::PartitionStatus).
/// Only resource exhaustion and surrounding I/O failures end up here.
#[derive(Debug)]
pub enum PartitionError {
    /// Reachability table could not be allocated
    AllocationFailure {
        /// Requested number of rows (target sum + 1)
        rows: usize,
        /// Requested number of columns (element count + 1)
        columns: usize,
        /// What prevented the allocation
        reason: &'static str,
    },

    /// Reachability table would exceed the configured byte limit
    TableLimitExceeded {
        /// Bytes the packed table would occupy
        required_bytes: usize,
        /// Configured ceiling
        limit: usize,
    },

    /// Sum of the input does not fit in the element type
    SumOverflow {
        /// Number of input elements
        len: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
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

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure {
                rows,
                columns,
                reason,
            } => {
                write!(
                    f,
                    "Failed to allocate {rows}x{columns} reachability table: {reason}"
                )
            }
            Self::TableLimitExceeded {
                required_bytes,
                limit,
            } => {
                write!(
                    f,
                    "Reachability table needs {required_bytes} bytes, limit is {limit}"
                )
            }
            Self::SumOverflow { len } => {
                write!(f, "Sum of {len} elements overflows the element type")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for PartitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl PartitionError {
    /// Whether the error stems from the table being too large
    pub const fn is_resource_exhaustion(&self) -> bool {
        matches!(
            self,
            Self::AllocationFailure { .. } | Self::TableLimitExceeded { .. }
        )
    }
}

/// Convenience type alias for partitioning results
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O result into a crate result carrying file context
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped as [`PartitionError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PartitionError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PartitionError {
    PartitionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an allocation failure for a table of the given shape
pub const fn allocation_failure(
    rows: usize,
    columns: usize,
    reason: &'static str,
) -> PartitionError {
    PartitionError::AllocationFailure {
        rows,
        columns,
        reason,
    }
}
