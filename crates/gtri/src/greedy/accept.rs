use super::stream::{Entry, Triangulation, Verdict};
use crate::geom2::{crosses_with, EndpointTouch, Point, Segment};

/// Sequential acceptance state for one run.
///
/// Segments must be visited in stream order. A candidate is tested against every segment
/// accepted so far (never against rejected ones) and is rejected on the first crossing.
#[derive(Clone, Debug)]
pub struct Acceptor<R> {
    rule: R,
    accepted: Vec<(usize, Segment)>,
    visited: usize,
}

impl<R: EndpointTouch> Acceptor<R> {
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            accepted: Vec::new(),
            visited: 0,
        }
    }

    /// Decide the next segment in stream order.
    pub fn visit(&mut self, candidate: &Segment) -> Verdict {
        let index = self.visited;
        self.visited += 1;
        let blocker = self
            .accepted
            .iter()
            .find(|(_, acc)| crosses_with(candidate, acc, &self.rule))
            .map(|&(by, _)| by);
        match blocker {
            Some(by) => Verdict::Rejected { by },
            None => {
                self.accepted.push((index, *candidate));
                Verdict::Accepted
            }
        }
    }

    /// Number of segments visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Accepted segments with their stream indices, in acceptance order.
    pub fn accepted(&self) -> &[(usize, Segment)] {
        &self.accepted
    }
}

/// Run the acceptance engine over an already length-sorted sequence.
pub fn accept_sorted<R: EndpointTouch + ?Sized>(
    points: Vec<Point>,
    sorted: Vec<Segment>,
    rule: &R,
) -> Triangulation {
    let mut acceptor = Acceptor::new(rule);
    let entries = sorted
        .into_iter()
        .map(|segment| Entry {
            verdict: acceptor.visit(&segment),
            segment,
        })
        .collect();
    Triangulation::from_parts(points, entries)
}
