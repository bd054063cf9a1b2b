//! Greedy planar edge selection over 2D point sets.
//!
//! Pipeline
//! - points → candidate segments (every unordered pair) → stable ascending-length sort →
//!   greedy acceptance against the segments accepted so far → annotated result stream.
//! - Every stage is a pure function of its input; a run owns all of its collections.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Rendering, document emission and file loading are not part of this crate; they consume
//!   the [`Triangulation`] stream (see the `gtri` binary for the file-based collaborators).

pub mod api;
pub mod error;
pub mod geom2;
pub mod greedy;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::TriError;
pub use geom2::{EndpointTouch, EpsTouch, ExactTouch, Point, Segment};
pub use greedy::{triangulate, triangulate_with, Entry, Triangulation, Verdict};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
    pub use crate::geom2::{
        crosses, crosses_with, EndpointTouch, EpsTouch, ExactTouch, Point, Segment,
    };
    pub use crate::greedy::{triangulate, triangulate_with, Entry, Step, Triangulation, Verdict};
    pub use crate::TriError;
    pub use nalgebra::Vector2 as Vec2;
}

/// The six points the greedy heuristic was first demonstrated on.
///
/// Kept in the library so golden tests, the bench and the CLI `demo` agree on one input.
pub fn historic_points() -> Vec<Point> {
    [
        (80.0, 720.0),
        (700.0, 500.0),
        (900.0, 740.0),
        (250.0, 500.0),
        (750.0, 600.0),
        (700.0, 100.0),
    ]
    .into_iter()
    .map(|(x, y)| Vec2::new(x, y))
    .collect()
}
