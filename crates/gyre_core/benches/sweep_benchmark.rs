//! # Sweep Math Benchmark
//!
//! ARCHITECT'S REQUIREMENTS:
//! - Normalizing a 1,000-slice series stays comfortably sub-microsecond-per-slice
//! - A full 5-second sweep at 60fps ticks without a single allocation
//!
//! Run with: `cargo bench --package gyre_core`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gyre_core::{AnimationDriver, Easing, Proportions, RingGeometry};

/// One tick of a 60fps host.
const FRAME_DT: f32 = 1.0 / 60.0;

/// Benchmark: Normalize series of increasing slice counts.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for count in [4_usize, 100, 1_000] {
        let values: Vec<f32> = (0..count).map(|i| (i % 7) as f32 + 1.0).collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &values, |b, values| {
            b.iter(|| black_box(Proportions::normalize(values, 250.0, true)));
        });
    }

    group.finish();
}

/// Benchmark: A complete 5-second sweep ticked at 60fps.
fn bench_full_sweep(c: &mut Criterion) {
    c.bench_function("full_sweep_5s_at_60fps", |b| {
        b.iter(|| {
            let mut driver = AnimationDriver::new();
            let run = driver.start(5.0, Easing::Linear);

            let mut last = 0.0;
            while let Some(progress) = driver.tick(run, FRAME_DT) {
                last = progress;
            }

            black_box(last)
        });
    });
}

/// Benchmark: Geometry recompute on viewport change.
fn bench_geometry(c: &mut Criterion) {
    c.bench_function("ring_geometry_compute", |b| {
        b.iter(|| black_box(RingGeometry::compute(1920.0, 1080.0, 5.0)));
    });
}

criterion_group!(benches, bench_normalize, bench_full_sweep, bench_geometry);

criterion_main!(benches);
