//! Criterion benchmarks for the greedy pipeline and its stages.
//! Focus sizes: n in {10, 25, 50, 100, 200} points (n(n-1)/2 candidates).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p gtri

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gtri::api::{
    accept_sorted, candidates, draw_cloud, sort_by_length, triangulate, CloudCfg, ExactTouch,
    ReplayToken,
};

fn cloud(n: usize, seed: u64) -> Vec<gtri::Point> {
    let cfg = CloudCfg {
        count: n,
        ..CloudCfg::default()
    };
    draw_cloud(cfg, ReplayToken::new(seed, 0))
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for &n in &[10usize, 25, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, &n| {
            let pts = cloud(n, 43);
            b.iter(|| {
                let _t = triangulate(&pts).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("sort_by_length", n), &n, |b, &n| {
            let pts = cloud(n, 44);
            b.iter_batched(
                || candidates(&pts),
                |cands| {
                    let _sorted = sort_by_length(cands);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("accept_sorted", n), &n, |b, &n| {
            let pts = cloud(n, 45);
            b.iter_batched(
                || sort_by_length(candidates(&pts)),
                |sorted| {
                    let _t = accept_sorted(Vec::new(), sorted, &ExactTouch);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_greedy);
criterion_main!(benches);
