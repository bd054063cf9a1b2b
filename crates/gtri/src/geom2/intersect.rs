//! Proper-crossing predicate for two segments.
//!
//! Parametric form: `s1(ua) = s1.a + ua (s1.b - s1.a)`, `s2(ub) = s2.a + ub (s2.b - s2.a)`,
//! solved with the 2×2 determinant
//! `d = (s1.ax - s1.bx)(s2.by - s2.ay) - (s1.ay - s1.by)(s2.bx - s2.ax)`.
//!
//! Outcomes
//! - `d == 0` (parallel or collinear, overlapping or not): no crossing.
//! - `ua` or `ub` outside `[0, 1]`: no crossing.
//! - computed point touches an endpoint of `s2` (per `EndpointTouch`): no crossing.
//! - otherwise: crossing.
//!
//! Only `s2`'s endpoints are exempt, so the predicate is not symmetric: a T-junction where
//! `s1` ends in the interior of `s2` crosses, the mirrored call does not.

use super::touch::{EndpointTouch, ExactTouch};
use super::types::{Point, Segment};

/// Intersection parameters `(ua, ub)` of the supporting lines, or `None` if `d == 0`.
pub fn intersection_params(s1: &Segment, s2: &Segment) -> Option<(f64, f64)> {
    let (a1, b1) = (s1.a(), s1.b());
    let (a2, b2) = (s2.a(), s2.b());
    let d = (a1.x - b1.x) * (b2.y - a2.y) - (a1.y - b1.y) * (b2.x - a2.x);
    if d == 0.0 {
        return None;
    }
    let ua = ((a2.x - b2.x) * (a1.y - a2.y) - (a2.y - b2.y) * (a1.x - a2.x)) / d;
    let ub = ((a1.x - b1.x) * (a1.y - a2.y) - (a1.y - b1.y) * (a1.x - a2.x)) / d;
    Some((ua, ub))
}

/// Proper crossing with exact endpoint comparison.
#[inline]
pub fn crosses(s1: &Segment, s2: &Segment) -> bool {
    crosses_with(s1, s2, &ExactTouch)
}

/// Proper crossing with a caller-chosen endpoint-touch rule.
pub fn crosses_with<R: EndpointTouch + ?Sized>(s1: &Segment, s2: &Segment, rule: &R) -> bool {
    let Some((ua, ub)) = intersection_params(s1, s2) else {
        return false;
    };
    let unit = 0.0..=1.0;
    if !unit.contains(&ua) || !unit.contains(&ub) {
        return false;
    }
    let (a1, b1) = (s1.a(), s1.b());
    let hit = Point::new(a1.x + ua * (b1.x - a1.x), a1.y + ua * (b1.y - a1.y));
    !(rule.touches(hit, s2.a()) || rule.touches(hit, s2.b()))
}
