//! Criterion benchmarks for whole-frame advances on the reference profiles.

use criterion::{criterion_group, criterion_main, Criterion};
use reagent_bench::{reference_profile, stress_profile};
use reagent_engine::{ExecutionMode, Simulation};

/// Benchmark: one 10-sub-step frame on the 40K-cell profile.
fn bench_reference_frame(c: &mut Criterion) {
    let mut serial = Simulation::new(reference_profile(42, ExecutionMode::Serial)).unwrap();
    c.bench_function("reference_frame_serial", |b| {
        b.iter(|| {
            serial.advance_frame().unwrap();
        });
    });

    let mut parallel = Simulation::new(reference_profile(
        42,
        ExecutionMode::Parallel { worker_count: None },
    ))
    .unwrap();
    c.bench_function("reference_frame_parallel", |b| {
        b.iter(|| {
            parallel.advance_frame().unwrap();
        });
    });
}

/// Benchmark: one frame on the ~400K-cell profile, parallel only.
fn bench_stress_frame(c: &mut Criterion) {
    let mut sim = Simulation::new(stress_profile(42, ExecutionMode::Parallel { worker_count: None }))
        .unwrap();
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("frame_parallel", |b| {
        b.iter(|| {
            sim.advance_frame().unwrap();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_reference_frame, bench_stress_frame);
criterion_main!(benches);
