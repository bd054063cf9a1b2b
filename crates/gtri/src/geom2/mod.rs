//! 2D geometry primitives for greedy edge selection.
//!
//! Purpose
//! - `Point` and the immutable `Segment` value (endpoints + cached length).
//! - The proper-crossing predicate used by the acceptance engine.
//! - Reproducible random point clouds (`rand`) for experiments and tests.
//!
//! Numerics
//! - Everything is `f64`. Lengths are compared exactly; the crossing predicate uses an exact
//!   `d == 0` parallel test and a pluggable endpoint-touch rule (`EndpointTouch`).
//!
//! Code cross-refs: `Segment`, `crosses`, `crosses_with`, `EndpointTouch`

mod intersect;
pub mod rand;
mod touch;
mod types;

pub use intersect::{crosses, crosses_with, intersection_params};
pub use touch::{EndpointTouch, EpsTouch, ExactTouch};
pub use types::{Point, Segment};

#[cfg(test)]
mod tests;
