//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the `gtri` binary, benches
//!   and experiments. Breaking changes are allowed and expected.
//! - Stage functions are exported individually so callers can time or inspect one stage.

// Geometry primitives
pub use crate::geom2::{
    crosses, crosses_with, intersection_params, EndpointTouch, EpsTouch, ExactTouch, Point,
    Segment,
};
// Random point clouds
pub use crate::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
// Pipeline stages and result stream
pub use crate::greedy::{
    accept_sorted, candidate_count, candidates, sort_by_length, triangulate, triangulate_with,
    validate_points, Acceptor, Entry, Step, Steps, Triangulation, Verdict,
};
pub use crate::TriError;

