//! Endpoint-touch rules for the crossing predicate.
//!
//! After the parametric solve finds an intersection inside both segments, the predicate asks
//! whether that computed point "is" an endpoint of the second segment. A touch there counts as
//! a shared vertex, not a crossing.

use super::types::Point;
use crate::error::TriError;

/// Decides whether a computed intersection point coincides with a segment endpoint.
pub trait EndpointTouch {
    fn touches(&self, computed: Point, endpoint: Point) -> bool;
}

/// Bitwise equality on both coordinates.
///
/// The computed point comes out of a division, so two segments sharing a vertex can still be
/// reported as crossing when the division rounds away from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactTouch;

impl EndpointTouch for ExactTouch {
    #[inline]
    fn touches(&self, computed: Point, endpoint: Point) -> bool {
        computed.x == endpoint.x && computed.y == endpoint.y
    }
}

/// Tolerant comparison: both coordinates within `eps` (Chebyshev distance).
///
/// Pre: `eps` finite and `>= 0`. A negative or NaN `eps` never touches, which is stricter than
/// `ExactTouch`; build through `EpsTouch::new` to have that rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpsTouch {
    pub eps: f64,
}

impl EpsTouch {
    pub fn new(eps: f64) -> Result<Self, TriError> {
        if eps.is_finite() && eps >= 0.0 {
            Ok(Self { eps })
        } else {
            Err(TriError::InvalidTolerance { eps })
        }
    }
}

impl Default for EpsTouch {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

impl EndpointTouch for EpsTouch {
    #[inline]
    fn touches(&self, computed: Point, endpoint: Point) -> bool {
        (computed.x - endpoint.x).abs() <= self.eps && (computed.y - endpoint.y).abs() <= self.eps
    }
}

impl<T: EndpointTouch + ?Sized> EndpointTouch for &T {
    #[inline]
    fn touches(&self, computed: Point, endpoint: Point) -> bool {
        (**self).touches(computed, endpoint)
    }
}
