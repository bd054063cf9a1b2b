//! Random point clouds in 2D (uniform box + optional lattice snap + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of point sets for benches, property tests and the
//!   `gtri sample` command.
//!
//! Model
//! - Draw `count` points uniformly in `[0, width] × [0, height]`.
//! - With `snap = Some(step)`, round each coordinate to a multiple of `step`. Coarse steps
//!   produce collinear triples and coincident points on purpose.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    /// Lattice step for rounding coordinates. Ignored unless positive and finite.
    pub snap: Option<f64>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 12,
            width: 1000.0,
            height: 800.0,
            snap: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    /// Token for the next draw in the same sequence.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud. Same `(cfg, tok)` always yields the same points in the same order.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let w = cfg.width.max(0.0);
    let h = cfg.height.max(0.0);
    let step = cfg.snap.filter(|s| s.is_finite() && *s > 0.0);
    (0..cfg.count)
        .map(|_| {
            let x = rng.gen::<f64>() * w;
            let y = rng.gen::<f64>() * h;
            match step {
                Some(s) => Point::new((x / s).round() * s, (y / s).round() * s),
                None => Point::new(x, y),
            }
        })
        .collect()
}
