//! Export boundary error types.

use thiserror::Error;

/// Errors that can occur while producing an export document.
///
/// Export failures are reported at the boundary and never affect the
/// already-assembled report entries.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("document encoding error: {0}")]
    Encoding(String),

    #[error("document layout error: {0}")]
    Layout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Convenience alias for export results.
pub type ExportResult<T> = Result<T, ExportError>;
