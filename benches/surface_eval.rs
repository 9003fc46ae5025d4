use std::hint::black_box;

use betavol::surface::{
    BetaSurface, BetaVector, VolSurface, evaluate_surface, evaluate_surface_batch,
};
use criterion::{Criterion, criterion_group, criterion_main};

const BETA: [f64; 5] = [0.20, 0.06, -0.12, 0.015, 0.03];

/// Moneyness grid on [-1, 1] with `n` points.
fn moneyness_grid(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64)
        .collect()
}

fn scalar_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_scalar");

    group.bench_function("evaluate_downside", |b| {
        b.iter(|| evaluate_surface(black_box(-0.25), black_box(0.75), black_box(&BETA)))
    });
    group.bench_function("evaluate_upside", |b| {
        b.iter(|| evaluate_surface(black_box(0.25), black_box(0.75), black_box(&BETA)))
    });

    let surface = BetaSurface::new(BetaVector::new(BETA).expect("benchmark beta should be valid"));
    group.bench_function("checked_black_vol", |b| {
        b.iter(|| surface.black_vol(black_box(0.75), black_box(-0.25)))
    });

    group.finish();
}

fn batch_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_batch");

    for n in [21, 201, 2001] {
        let ms = moneyness_grid(n);
        group.bench_function(format!("grid_{n}"), |b| {
            b.iter(|| evaluate_surface_batch(black_box(&ms), black_box(&[1.0]), black_box(&BETA)))
        });
    }

    group.finish();
}

fn diagnostics_benchmark(c: &mut Criterion) {
    let surface = BetaSurface::new(BetaVector::new(BETA).expect("benchmark beta should be valid"));
    c.bench_function("surface_diagnostics", |b| b.iter(|| surface.diagnostics()));
}

criterion_group!(
    benches,
    scalar_benchmarks,
    batch_benchmarks,
    diagnostics_benchmark
);
criterion_main!(benches);
