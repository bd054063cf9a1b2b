//! Point sources for `gtri run`.
//!
//! Text format: the first token is the point count `n`, followed by `n` whitespace-separated
//! `x y` pairs. Extra trailing tokens are ignored; missing ones are an error.
//! CSV format (`.csv`): header with `x` and `y` columns, read through polars.

use anyhow::{bail, Context, Result};
use gtri::{Point, Vec2};
use polars::prelude::*;
use std::fmt::Write as _;
use std::path::Path;

/// Load points, dispatching on the file extension.
pub fn load(path: &Path) -> Result<Vec<Point>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_csv(path)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading points from {}", path.display()))?;
        parse_text(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Parse the count-prefixed text format.
pub fn parse_text(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let count: usize = match tokens.next() {
        Some(tok) => tok
            .parse()
            .with_context(|| format!("point count {tok:?} is not a non-negative integer"))?,
        None => bail!("empty point file"),
    };
    let mut coord = |i: usize, axis: &str| -> Result<f64> {
        let tok = tokens
            .next()
            .with_context(|| format!("expected {count} points, input ends at point {i}"))?;
        tok.parse()
            .with_context(|| format!("point {i}: {axis} coordinate {tok:?} is not a number"))
    };
    // The count comes from the file; don't trust it for preallocation.
    let mut points = Vec::with_capacity(count.min(1 << 16));
    for i in 0..count {
        let x = coord(i, "x")?;
        let y = coord(i, "y")?;
        points.push(Vec2::new(x, y));
    }
    Ok(points)
}

/// Render points in the count-prefixed text format.
pub fn to_text(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        // `{}` on f64 prints the shortest repr that parses back to the same value.
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    out
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading csv {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "points_csv_shape");
    let xs = df
        .column("x")
        .and_then(|c| c.cast(&DataType::Float64))
        .context("csv column `x`")?;
    let ys = df
        .column("y")
        .and_then(|c| c.cast(&DataType::Float64))
        .context("csv column `y`")?;
    let mut points = Vec::with_capacity(df.height());
    for (i, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Vec2::new(x, y)),
            _ => bail!("csv row {i}: missing or non-numeric coordinate"),
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_count_prefixed_pairs() {
        let pts = parse_text("3\n0 0\n10 0\n5.5 -2e1\n").unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!((pts[2].x, pts[2].y), (5.5, -20.0));
    }

    #[test]
    fn ignores_trailing_tokens_and_accepts_zero() {
        assert_eq!(parse_text("1 1 2 99 99").unwrap().len(), 1);
        assert!(parse_text("0").unwrap().is_empty());
    }

    #[test]
    fn rejects_short_or_malformed_input() {
        assert!(parse_text("").is_err());
        assert!(parse_text("-1").is_err());
        let short = parse_text("2\n0 0\n1").unwrap_err();
        assert!(format!("{short:#}").contains("input ends at point 1"));
        let bad = parse_text("1\n0 zero").unwrap_err();
        assert!(format!("{bad:#}").contains("y coordinate"));
    }

    #[test]
    fn text_round_trip_is_exact() {
        let pts = vec![Vec2::new(0.1, 0.7), Vec2::new(-3.0, 1e-7)];
        assert_eq!(parse_text(&to_text(&pts)).unwrap(), pts);
    }

    #[test]
    fn loads_text_and_csv_files() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("points.txt");
        fs::write(&txt, "2\n80 720\n700 500\n").unwrap();
        assert_eq!(load(&txt).unwrap().len(), 2);

        let csv = dir.path().join("points.csv");
        fs::write(&csv, "x,y\n80,720\n700.5,500\n900,740\n").unwrap();
        let pts = load(&csv).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!((pts[1].x, pts[1].y), (700.5, 500.0));

        let no_y = dir.path().join("bad.csv");
        fs::write(&no_y, "x,z\n1,2\n").unwrap();
        assert!(load(&no_y).is_err());
    }
}
