//! Error types for the consumption-analytics library.

use thiserror::Error;

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while analyzing consumption data.
///
/// Every component reports malformed input through one of these variants
/// instead of panicking; callers branch on the `Err` before rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Input dataset or series is empty.
    #[error("empty input data")]
    EmptyData,

    /// A required column is absent.
    #[error("missing field: {0}")]
    MissingField(String),

    /// Insufficient records for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Date could not be parsed.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,
}
