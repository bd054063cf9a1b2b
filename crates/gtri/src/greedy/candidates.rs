use crate::geom2::{Point, Segment};

/// Number of candidate segments for `n` points: `n(n-1)/2`.
#[inline]
pub fn candidate_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// All unordered point pairs as segments, `(i, j)` with `i < j`, `i` outer and `j` inner.
///
/// Fewer than two points give an empty vector. Coincident points still pair up into
/// zero-length segments.
pub fn candidates(points: &[Point]) -> Vec<Segment> {
    let mut out = Vec::with_capacity(candidate_count(points.len()));
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            out.push(Segment::new(a, b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn candidate_count_small_values() {
        assert_eq!(candidate_count(0), 0);
        assert_eq!(candidate_count(1), 0);
        assert_eq!(candidate_count(2), 1);
        assert_eq!(candidate_count(4), 6);
        assert_eq!(candidate_count(6), 15);
        let p: Vec<Point> = (0..7).map(|i| vector![i as f64, (i * i) as f64]).collect();
        assert_eq!(candidates(&p).len(), candidate_count(7));
    }

    #[test]
    fn nested_pair_order() {
        let p = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        let c = candidates(&p);
        let pairs: Vec<_> = c.iter().map(|s| (s.a().x, s.b().x)).collect();
        assert_eq!(pairs, vec![(0.0, 1.0), (0.0, 2.0), (1.0, 2.0)]);
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert!(candidates(&[]).is_empty());
        assert!(candidates(&[vector![3.0, 4.0]]).is_empty());
    }

    #[test]
    fn duplicates_produce_zero_length_segment() {
        let c = candidates(&[vector![1.0, 1.0], vector![1.0, 1.0]]);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].length(), 0.0);
    }
}
