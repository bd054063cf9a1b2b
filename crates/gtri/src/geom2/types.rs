//! Basic 2D types: `Point` and the immutable `Segment`.

use nalgebra::Vector2;

/// A point in the plane. Plain value, copied freely.
pub type Point = Vector2<f64>;

/// Straight segment between two points.
///
/// The length is computed once at construction and never changes. A segment carries no
/// acceptance state; verdicts live in `greedy::Triangulation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    a: Point,
    b: Point,
    length: f64,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            length: euclid(a, b),
        }
    }
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }
    /// Euclidean distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
    /// Zero-length segment (coincident endpoints).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    /// Proper crossing with `other` under exact endpoint comparison.
    #[inline]
    pub fn crosses(&self, other: &Segment) -> bool {
        super::crosses(self, other)
    }
}

// sqrt(dx² + dy²), written out so the operation order is fixed.
#[inline]
fn euclid(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
