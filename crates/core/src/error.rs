//! Error types for the analysis engine.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal analysis errors.
///
/// Recoverable anomalies (open polylines, out-of-bounds shapes, excluded
/// circles) are not errors: they are carried as [`Warning`](crate::Warning)
/// values on a successful result so that a numeric answer is still
/// produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The drawing contains no closed polyline, so no outer boundary (and
    /// therefore no net area) can be defined.
    #[error("no closed polylines found in drawing")]
    NoClosedShapes,

    /// An entity violates its construction contract (empty polyline,
    /// non-positive circle radius).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
