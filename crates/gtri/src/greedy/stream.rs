//! Result stream: the ordered, annotated segment sequence handed to consumers.
//!
//! - Fully materialized and read-only; iterate it as often as needed.
//! - Order is the ascending-length order of the sorter. Rejected segments stay in place.
//! - `steps()` replays the run one decision at a time, together with the accepted set that
//!   existed when each decision was made (what an animated renderer draws).

use crate::geom2::{Point, Segment};

/// Final state of a visited segment. Both variants are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// Crosses the accepted segment at stream index `by` (the first one found).
    Rejected { by: usize },
}

impl Verdict {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
    #[inline]
    pub fn blocker(&self) -> Option<usize> {
        match *self {
            Verdict::Accepted => None,
            Verdict::Rejected { by } => Some(by),
        }
    }
}

/// One stream position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub segment: Segment,
    pub verdict: Verdict,
}

impl Entry {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

/// Outcome of one run over a point set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    points: Vec<Point>,
    entries: Vec<Entry>,
    accepted: Vec<usize>,
}

impl Triangulation {
    pub(crate) fn from_parts(points: Vec<Point>, entries: Vec<Entry>) -> Self {
        let accepted = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_accepted())
            .map(|(i, _)| i)
            .collect();
        Self {
            points,
            entries,
            accepted,
        }
    }

    /// Input points, in caller order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
    /// Stream indices of accepted entries, ascending.
    pub fn accepted_indices(&self) -> &[usize] {
        &self.accepted
    }
    pub fn accepted(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.accepted.iter().map(move |&i| &self.entries[i].segment)
    }
    pub fn rejected(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.entries
            .iter()
            .filter(|e| !e.is_accepted())
            .map(|e| &e.segment)
    }
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
    pub fn rejected_count(&self) -> usize {
        self.entries.len() - self.accepted.len()
    }
    /// Replay the decisions in stream order.
    pub fn steps(&self) -> Steps<'_> {
        Steps {
            tri: self,
            next: 0,
            accepted_before: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One replayed decision.
#[derive(Clone, Copy, Debug)]
pub struct Step<'a> {
    pub index: usize,
    pub entry: &'a Entry,
    /// Stream indices accepted before this entry was visited.
    pub prior_accepted: &'a [usize],
    entries: &'a [Entry],
}

impl<'a> Step<'a> {
    /// Segments accepted before this entry was visited, in acceptance order.
    pub fn prior_segments(&self) -> impl Iterator<Item = &'a Segment> + 'a {
        let (ids, entries) = (self.prior_accepted, self.entries);
        ids.iter().map(move |&i| &entries[i].segment)
    }
}

/// Iterator returned by [`Triangulation::steps`].
#[derive(Clone, Debug)]
pub struct Steps<'a> {
    tri: &'a Triangulation,
    next: usize,
    accepted_before: usize,
}

impl<'a> Iterator for Steps<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tri = self.tri;
        let entry = tri.entries.get(self.next)?;
        let step = Step {
            index: self.next,
            entry,
            prior_accepted: &tri.accepted[..self.accepted_before],
            entries: &tri.entries,
        };
        if entry.is_accepted() {
            self.accepted_before += 1;
        }
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.tri.entries.len() - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Steps<'_> {}
