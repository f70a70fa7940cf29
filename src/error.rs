//! Error types for the tslab library.

use thiserror::Error;

/// Result type alias for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Errors that can occur when generating or fitting a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// A caller-supplied argument violates a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SeriesError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SeriesError::InvalidArgument(msg.into())
    }
}
