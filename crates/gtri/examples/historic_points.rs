//! Replay the greedy run on the historical six-point set.
//!
//! Usage:
//!   cargo run -p gtri --example historic_points
//!   cargo run -p gtri --example historic_points -- eps
//!
//! Prints one line per decision with the accepted set size at that moment, then the totals.
//! `eps` switches the endpoint comparison to the tolerant rule.

use gtri::prelude::*;

fn main() {
    let tolerant = std::env::args().nth(1).as_deref() == Some("eps");
    let points = gtri::historic_points();
    let result = if tolerant {
        triangulate_with(&points, &EpsTouch::default())
    } else {
        triangulate(&points)
    };
    let tri = match result {
        Ok(t) => t,
        Err(e) => {
            eprintln!("historic_points: {e}");
            return;
        }
    };
    for step in tri.steps() {
        let s = step.entry.segment;
        let verdict = match step.entry.verdict {
            Verdict::Accepted => "accept".to_string(),
            Verdict::Rejected { by } => format!("reject (crosses #{by})"),
        };
        println!(
            "#{:>2} ({:>5}, {:>5})-({:>5}, {:>5}) len={:>8.3} prior={} {}",
            step.index,
            s.a().x,
            s.a().y,
            s.b().x,
            s.b().y,
            s.length(),
            step.prior_accepted.len(),
            verdict
        );
    }
    println!(
        "accepted={} rejected={}",
        tri.accepted_count(),
        tri.rejected_count()
    );
}
