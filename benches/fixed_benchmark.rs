// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Raw Operations - Fixed16 multiply and divide in isolation
// 2. Kernels - One multiply + one divide per strategy (float, native, Fixed16)
// 3. Saturation - Divide inputs that take the guard path vs. the full division
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_diagnostic::prelude::*;
use std::hint::black_box;

// ============================================================================
// Raw Operation Benchmarks
// ============================================================================

fn benchmark_raw_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed16_ops");

    let a = Fixed16::from_f32(75.75);
    let b = Fixed16::from_f32(100.1);

    group.bench_function("fixed_mul", |bench| {
        bench.iter(|| black_box(black_box(a).fixed_mul(black_box(b))));
    });

    group.bench_function("fixed_div", |bench| {
        bench.iter(|| black_box(black_box(a).fixed_div(black_box(b))));
    });

    group.finish();
}

// ============================================================================
// Kernel Benchmarks
// The same comparison as the diagnostic runner, under criterion's sampling
// ============================================================================

fn benchmark_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");

    let float = FloatKernel::new(75.75, 100.1);
    let native = NativeFixedKernel::new(75.75, 100.1);
    let fixed = Fixed16Kernel::new(75.75, 100.1);

    group.bench_function(float.name(), |b| {
        b.iter(|| black_box(black_box(&float).evaluate()))
    });
    group.bench_function(native.name(), |b| {
        b.iter(|| black_box(black_box(&native).evaluate()))
    });
    group.bench_function(fixed.name(), |b| {
        b.iter(|| black_box(black_box(&fixed).evaluate()))
    });

    group.finish();
}

// ============================================================================
// Saturation Benchmarks
// ============================================================================

fn benchmark_divide_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_div_paths");

    let cases = [
        ("in_range", Fixed16::from_f32(75.75), Fixed16::from_f32(100.1)),
        ("saturated", Fixed16::MAX, Fixed16::from_raw(1)),
        ("zero_divisor", Fixed16::ONE, Fixed16::ZERO),
    ];

    for (label, a, b) in cases.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(*a, *b), |bench, &(a, b)| {
            bench.iter(|| black_box(black_box(a).fixed_div(black_box(b))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_raw_operations,
    benchmark_kernels,
    benchmark_divide_paths,
);
criterion_main!(benches);
