//! # Frame Emission Benchmark
//!
//! ARCHITECT'S REQUIREMENTS:
//! - Emitting a frame for a 256-slice ring stays well under a 60fps frame slot
//! - The steady-state frame loop reuses its command buffer, zero regrowth
//!
//! Run with: `cargo bench --package gyre_ui`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gyre_ui::{RingConfig, StatsRing};

/// One tick of a 60fps host.
const FRAME_DT: f32 = 1.0 / 60.0;

/// Builds a ring mid-sweep so every arc carries rotation and scaling.
fn ring_with_slices(count: usize) -> StatsRing {
    let values: Vec<f32> = (0..count).map(|i| (i % 9) as f32 + 1.0).collect();

    let mut ring = StatsRing::new(RingConfig::default());
    ring.resize(400.0, 400.0);
    ring.set_data(&values);
    ring.update(2.5);
    ring
}

/// Benchmark: Emit one frame for rings of increasing slice counts.
fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for count in [4_usize, 64, 256] {
        let ring = ring_with_slices(count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &ring, |b, ring| {
            let mut commands = Vec::with_capacity(count + 2);
            b.iter(|| {
                commands.clear();
                ring.render(&mut commands);
                black_box(commands.len())
            });
        });
    }

    group.finish();
}

/// Benchmark: The whole frame loop step (tick + emit) at 60fps.
fn bench_frame_step(c: &mut Criterion) {
    c.bench_function("frame_step_4_slices", |b| {
        let mut ring = ring_with_slices(4);
        let mut commands = Vec::with_capacity(8);

        b.iter(|| {
            ring.update(FRAME_DT);
            commands.clear();
            ring.render(&mut commands);
            black_box(commands.len())
        });
    });
}

criterion_group!(benches, bench_render_frame, bench_frame_step);

criterion_main!(benches);
