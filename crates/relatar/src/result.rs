//! Result and error types for Relatar.

use thiserror::Error;

/// Result type for Relatar operations
pub type RelatarResult<T> = Result<T, RelatarError>;

/// Errors that can occur while printing a report
///
/// The engine consumes already-validated execution data, so the only
/// operational failure is the output sink refusing a write.
#[derive(Debug, Error)]
pub enum RelatarError {
    /// Appending to the output sink failed
    #[error("failed to write to output sink: {0}")]
    SinkWrite(#[from] std::io::Error),
}
