//! Greedy edge selection: candidate generation, length sort, acceptance, result stream.
//!
//! Purpose
//! - Turn a point set into the ascending-length sequence of all `n(n-1)/2` segments, each
//!   annotated as accepted (non-crossing with every earlier acceptance) or rejected.
//!
//! Stages
//! - `candidates`: every unordered pair `(i, j)`, `i < j`, in nested index order.
//! - `sort_by_length`: stable ascending sort; exact ties keep candidate order.
//! - `Acceptor`: sequential decisions against the accepted-so-far set. Must run in stream
//!   order; each decision depends on all earlier ones.
//! - `Triangulation`: the materialized, read-only result stream.
//!
//! Code cross-refs: `geom2::{Segment, crosses_with, EndpointTouch}`

mod accept;
mod candidates;
mod sort;
mod stream;

pub use accept::{accept_sorted, Acceptor};
pub use candidates::{candidate_count, candidates};
pub use sort::sort_by_length;
pub use stream::{Entry, Step, Steps, Triangulation, Verdict};

use crate::error::TriError;
use crate::geom2::{EndpointTouch, ExactTouch, Point};

/// Reject non-finite coordinates. Runs before any segment is built.
pub fn validate_points(points: &[Point]) -> Result<(), TriError> {
    match points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some((index, p)) => Err(TriError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        }),
        None => Ok(()),
    }
}

/// Full pipeline with exact endpoint comparison.
///
/// Pre: coordinates finite. Zero or one point is valid and yields an empty stream.
/// Post: `n(n-1)/2` entries, ascending by length with stable ties, no two accepted entries
/// crossing (per the predicate).
pub fn triangulate(points: &[Point]) -> Result<Triangulation, TriError> {
    triangulate_with(points, &ExactTouch)
}

/// Full pipeline with a caller-chosen endpoint-touch rule.
pub fn triangulate_with<R: EndpointTouch + ?Sized>(
    points: &[Point],
    rule: &R,
) -> Result<Triangulation, TriError> {
    validate_points(points)?;
    let sorted = sort_by_length(candidates(points));
    Ok(accept_sorted(points.to_vec(), sorted, rule))
}
