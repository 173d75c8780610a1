//! Criterion micro-benchmarks for the Laplacian kernel and stepper.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use reagent_core::{GrayScottParams, Species};
use reagent_propagators::{laplacian, GrayScott};
use reagent_space::Grid;
use reagent_test_utils::random_grid;

/// Benchmark: wrapped-lookup Laplacian on every cell of a 100x100 grid.
fn bench_laplacian_lookup_10k(c: &mut Criterion) {
    let grid = random_grid(100, 100, 1);

    c.bench_function("laplacian_lookup_10k", |b| {
        b.iter(|| {
            for v in 0..100i32 {
                for u in 0..100i32 {
                    black_box(laplacian(&grid, u, v, Species::A));
                }
            }
        });
    });
}

/// Benchmark: one full step, serial vs row-parallel, at several sizes.
fn bench_step(c: &mut Criterion) {
    let stepper = GrayScott::new(GrayScottParams::default()).unwrap();
    let mut group = c.benchmark_group("step");
    for side in [64u32, 200, 512] {
        let current = random_grid(side, side, 7);
        let mut next = Grid::new(side, side).unwrap();
        group.bench_with_input(BenchmarkId::new("serial", side), &side, |b, _| {
            b.iter(|| stepper.step(black_box(&current), &mut next, 1.0).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", side), &side, |b, _| {
            b.iter(|| {
                stepper
                    .step_parallel(black_box(&current), &mut next, 1.0)
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_laplacian_lookup_10k, bench_step);
criterion_main!(benches);
