//! Error types for tsreport

use thiserror::Error;

/// Result type alias for tsreport operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// tsreport error types
///
/// Only failures that abort a whole ingestion pass live here: the
/// snapshot root cannot be walked, or a file selected by the collector
/// cannot be opened. Per-line problems inside a file are absorbed by
/// the record parser and never surface as an error.
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO operation failed (opening a snapshot file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed (root missing or unreadable)
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
