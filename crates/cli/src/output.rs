//! JSON form of a result stream, for renderers and report generators outside this repo.

use gtri::{Triangulation, Verdict};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SegmentRecord {
    pub index: usize,
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub length: f64,
    pub accepted: bool,
    /// Stream index of the accepted segment this one crosses (rejected only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_by: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct StreamRecord {
    pub touch: String,
    pub points: Vec<[f64; 2]>,
    pub accepted: usize,
    pub rejected: usize,
    pub segments: Vec<SegmentRecord>,
}

impl StreamRecord {
    pub fn new(tri: &Triangulation, touch: impl Into<String>) -> Self {
        let segments = tri
            .iter()
            .enumerate()
            .map(|(index, e)| SegmentRecord {
                index,
                a: [e.segment.a().x, e.segment.a().y],
                b: [e.segment.b().x, e.segment.b().y],
                length: e.segment.length(),
                accepted: e.verdict == Verdict::Accepted,
                blocked_by: e.verdict.blocker(),
            })
            .collect();
        Self {
            touch: touch.into(),
            points: tri.points().iter().map(|p| [p.x, p.y]).collect(),
            accepted: tri.accepted_count(),
            rejected: tri.rejected_count(),
            segments,
        }
    }
}
