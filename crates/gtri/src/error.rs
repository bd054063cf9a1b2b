//! Errors for the triangulation entry points.
//!
//! Degenerate geometry (coincident points, collinear segments) is not an error; it is resolved
//! by the crossing predicate. Only malformed input is rejected, and always before any segment
//! is generated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriError {
    /// A point carries a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
    /// Endpoint tolerance that is negative or not finite.
    #[error("endpoint tolerance {eps} must be finite and non-negative")]
    InvalidTolerance { eps: f64 },
}
