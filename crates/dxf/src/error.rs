//! Error types for DXF reading.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DxfError>;

/// Failures while reading a drawing file.
///
/// Read and parse failures are deliberately distinct outcomes from a
/// drawing that merely contains no closed shapes: the latter is an analysis
/// condition ([`platequote_core::Error::NoClosedShapes`]) that only the
/// engine can raise once it sees the entity lists.
#[derive(Debug, Error)]
pub enum DxfError {
    /// The file could not be read.
    #[error("failed to read drawing: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but is not a valid DXF drawing.
    #[error("failed to parse drawing: {0}")]
    Parse(String),
}
