//! Criterion benchmarks for the integration step and series throughput.
//!
//! Measures the single Heun step across the three statistical regimes and
//! full series generation including transient discard, to characterise the
//! per-sample cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qnoise_core::{
    HeunIntegrator, NoiseKind, NoiseRng, OuTransition, Seed, SeriesConfig, SeriesGenerator,
    Transient,
};

/// Benchmark one Heun step per statistical regime.
fn bench_heun_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("heun_step");

    for q in [0.5, 1.0, 1.5] {
        let integrator = HeunIntegrator::new(1.0, q, 100.0);
        group.bench_with_input(BenchmarkId::new("q", q), &integrator, |b, integrator| {
            let mut rng = NoiseRng::from_seed(42);
            let mut x = 0.0;
            b.iter(|| {
                x = integrator.step(black_box(x), &mut rng);
                x
            });
        });
    }

    group.finish();
}

/// Benchmark the exact Ornstein-Uhlenbeck transition for comparison.
fn bench_ou_step(c: &mut Criterion) {
    let transition = OuTransition::new(1.0, 100.0);

    c.bench_function("ou_step", |b| {
        let mut rng = NoiseRng::from_seed(42);
        let mut x = 0.0;
        b.iter(|| {
            x = transition.step(black_box(x), &mut rng);
            x
        });
    });
}

/// Benchmark end-to-end series generation (1000 samples, auto transient).
fn bench_series_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_generation");

    let kinds = [
        ("qnoise", NoiseKind::QNoise { q: 1.5 }),
        ("ornstein_uhlenbeck", NoiseKind::OrnsteinUhlenbeck),
        ("white", NoiseKind::WhiteNoise),
    ];

    for (name, kind) in kinds {
        group.bench_function(BenchmarkId::new("n1000", name), |b| {
            b.iter(|| {
                let config = SeriesConfig::builder()
                    .kind(kind)
                    .tau(1.0)
                    .resolution(100.0)
                    .n_samples(1_000)
                    .seed(Seed::Manual(42))
                    .transient(Transient::Auto)
                    .build()
                    .unwrap();
                SeriesGenerator::new(config).generate()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_heun_step,
    bench_ou_step,
    bench_series_generation
);
criterion_main!(benches);
