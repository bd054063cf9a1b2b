use super::*;
use crate::TriError;
use nalgebra::vector;

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
    Segment::new(vector![ax, ay], vector![bx, by])
}

#[test]
fn length_is_euclidean_and_cached() {
    let s = seg(0.0, 0.0, 3.0, 4.0);
    assert_eq!(s.length(), 5.0);
    assert_eq!(seg(3.0, 4.0, 0.0, 0.0).length(), 5.0);
    let z = seg(2.0, 2.0, 2.0, 2.0);
    assert_eq!(z.length(), 0.0);
    assert!(z.is_degenerate());
    assert!(!s.is_degenerate());
}

#[test]
fn proper_crossing_is_detected_both_ways() {
    let d1 = seg(0.0, 0.0, 10.0, 10.0);
    let d2 = seg(10.0, 0.0, 0.0, 10.0);
    assert!(crosses(&d1, &d2));
    assert!(crosses(&d2, &d1));
    assert!(d1.crosses(&d2));
    let (ua, ub) = intersection_params(&d1, &d2).unwrap();
    assert!((ua - 0.5).abs() < 1e-12 && (ub - 0.5).abs() < 1e-12);
}

#[test]
fn disjoint_segments_do_not_cross() {
    // Supporting lines meet at (5,5), outside the first segment.
    let s1 = seg(0.0, 0.0, 2.0, 2.0);
    let s2 = seg(10.0, 0.0, 0.0, 10.0);
    assert!(!crosses(&s1, &s2));
    assert!(!crosses(&s2, &s1));
}

#[test]
fn shared_endpoint_is_a_touch_not_a_crossing() {
    let side = seg(0.0, 0.0, 10.0, 0.0);
    let diag = seg(0.0, 0.0, 10.0, 10.0);
    assert!(!crosses(&diag, &side));
    assert!(!crosses(&side, &diag));
}

#[test]
fn parallel_and_collinear_never_cross() {
    // Parallel, apart.
    assert!(!crosses(&seg(0.0, 0.0, 10.0, 0.0), &seg(0.0, 1.0, 10.0, 1.0)));
    // Collinear with overlap: d == 0 short-circuits, overlap goes unreported.
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(5.0, 0.0, 15.0, 0.0);
    assert!(intersection_params(&a, &b).is_none());
    assert!(!crosses(&a, &b));
    // Zero-length segment gives d == 0 as well.
    assert!(!crosses(&seg(5.0, 5.0, 5.0, 5.0), &seg(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn t_junction_is_asymmetric() {
    let base = seg(0.0, 0.0, 10.0, 0.0);
    let stem = seg(5.0, 0.0, 5.0, 5.0);
    // Hit point (5,0) is interior to `base`, so only the mirrored call exempts it.
    assert!(crosses(&stem, &base));
    assert!(!crosses(&base, &stem));
}

#[test]
fn rounded_shared_endpoint_depends_on_touch_rule() {
    // Both segments end at (0.1, 0.8); the solve lands on x = 0.09999999999999998.
    let s1 = seg(0.8, 0.3, 0.1, 0.8);
    let s2 = seg(0.5, 0.4, 0.1, 0.8);
    assert!(crosses(&s1, &s2));
    assert!(crosses_with(&s1, &s2, &ExactTouch));
    assert!(!crosses_with(&s1, &s2, &EpsTouch::default()));
}

#[test]
fn eps_touch_respects_tolerance() {
    let rule = EpsTouch { eps: 0.5 };
    assert!(rule.touches(vector![1.0, 1.0], vector![1.4, 0.6]));
    assert!(!rule.touches(vector![1.0, 1.0], vector![1.6, 1.0]));
    assert!(ExactTouch.touches(vector![1.0, 1.0], vector![1.0, 1.0]));
    assert!(!ExactTouch.touches(vector![1.0, 1.0], vector![1.0, 1.0 + f64::EPSILON]));
}

#[test]
fn eps_touch_rejects_negative_and_non_finite_tolerance() {
    assert_eq!(EpsTouch::new(0.0).unwrap().eps, 0.0);
    assert_eq!(EpsTouch::new(1e-6).unwrap(), EpsTouch { eps: 1e-6 });
    assert!(matches!(
        EpsTouch::new(-1.0),
        Err(TriError::InvalidTolerance { eps }) if eps == -1.0
    ));
    assert!(matches!(EpsTouch::new(f64::NAN), Err(TriError::InvalidTolerance { .. })));
    assert!(EpsTouch::new(f64::INFINITY).is_err());
    // Unchecked negative tolerance never touches: a shared vertex turns into a crossing.
    let side = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
    let diag = Segment::new(vector![0.0, 0.0], vector![10.0, 10.0]);
    assert!(!crosses_with(&diag, &side, &EpsTouch::new(0.0).unwrap()));
    assert!(crosses_with(&diag, &side, &EpsTouch { eps: -1.0 }));
}
