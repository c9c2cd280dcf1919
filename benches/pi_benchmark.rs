// ============================================================================
// Machin Pi Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Primitives - single limb-vector operations at several widths
// 2. Series - one arctangent evaluation
// 3. Mode Comparison - Dense vs ZeroSkip on the full Machin run
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use machin_pi::prelude::*;
use std::sync::Arc;

// ============================================================================
// Primitive Benchmarks
// ============================================================================

fn benchmark_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    for width in [16usize, 256, 4096].iter() {
        let mut a = FixedPointNumber::zero(*width);
        a.set_inv(5);
        let mut b = FixedPointNumber::zero(*width);
        b.set_inv(239);

        group.bench_with_input(BenchmarkId::new("set_inv", width), width, |bench, &width| {
            let mut x = FixedPointNumber::zero(width);
            bench.iter(|| {
                x.set_inv(black_box(239));
                black_box(x.is_zero())
            });
        });

        group.bench_function(BenchmarkId::new("add_sub", width), |bench| {
            let mut x = a.clone();
            bench.iter(|| {
                x -= &b;
                x += &b;
                black_box(x.leading_zero_limbs())
            });
        });

        group.bench_with_input(BenchmarkId::new("set_to_div", width), &a, |bench, a| {
            let mut x = FixedPointNumber::zero(a.len());
            bench.iter(|| {
                x.set_to_div(a, black_box(57_121));
                black_box(x.leading_zero_limbs())
            });
        });

        group.bench_with_input(BenchmarkId::new("mul4", width), &a, |bench, a| {
            let mut x = a.clone();
            bench.iter(|| black_box(x.mul4()));
        });
    }

    group.finish();
}

// ============================================================================
// Series Benchmarks
// ============================================================================

fn benchmark_arctan_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("arctan_series");

    for x in [MACHIN_MAJOR, MACHIN_MINOR].iter() {
        group.bench_with_input(BenchmarkId::new("atan_inv_64_limbs", x), x, |bench, &x| {
            let series = ArctanSeries::new(64);
            bench.iter(|| black_box(series.evaluate(x).unwrap().stats.terms));
        });
    }

    group.finish();
}

// ============================================================================
// Mode Comparison
// Zero skipping pays off as the running term loses leading limbs
// ============================================================================

fn benchmark_mode_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("machin_mode_comparison");
    group.sample_size(20);

    for mode in [ArithmeticMode::Dense, ArithmeticMode::ZeroSkip].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", mode)),
            mode,
            |bench, &mode| {
                let engine = PiEngineBuilder::new()
                    .precision(256)
                    .mode(mode)
                    .build(Arc::new(NoOpEventHandler))
                    .unwrap();
                bench.iter(|| black_box(engine.compute().unwrap().integer_part));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_arctan_series,
    benchmark_mode_comparison
);
criterion_main!(benches);
