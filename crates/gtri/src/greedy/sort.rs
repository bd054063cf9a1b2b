use crate::geom2::Segment;

/// Stable ascending sort by length. Exactly equal lengths keep their input order.
///
/// No epsilon: lengths that differ in the last bit are not ties. Decisions downstream can
/// depend on tie order when equal-length segments cross, so stability is part of the contract.
pub fn sort_by_length(mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.sort_by(|a, b| {
        a.length()
            .partial_cmp(&b.length())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    segments
}
