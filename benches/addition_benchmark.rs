// ============================================================================
// Addition Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parse - decimal string to limb groups
// 2. Render - limb groups back to a decimal string
// 3. Add - carry-propagating addition across operand sizes
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_bigint::prelude::*;

/// A `digits`-long operand with every limb near the carry boundary.
fn nines(digits: usize) -> String {
    "9".repeat(digits)
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for digits in [9, 90, 900, 9000].iter() {
        let text = nines(*digits);

        group.bench_with_input(BenchmarkId::new("from_decimal_str", digits), &text, |b, text| {
            b.iter(|| black_box(BigInt::from_decimal_str(text).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for digits in [9, 90, 900, 9000].iter() {
        let value = BigInt::from_decimal_str(&nines(*digits)).unwrap();

        group.bench_with_input(BenchmarkId::new("to_decimal_string", digits), &value, |b, value| {
            b.iter(|| black_box(value.to_decimal_string()));
        });
    }

    group.finish();
}

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    // Equal-width operands: every position carries.
    for digits in [9, 90, 900, 9000].iter() {
        let a = BigInt::from_decimal_str(&nines(*digits)).unwrap();
        let b = a.clone();

        group.bench_with_input(BenchmarkId::new("equal_width", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(add(a, b)));
        });
    }

    // Mismatched widths: exercises the significance-aligned pairing.
    let wide = BigInt::from_decimal_str(&nines(900)).unwrap();
    let narrow = BigInt::from_decimal_str("999").unwrap();
    group.bench_function("mismatched_width_900_vs_3", |bench| {
        bench.iter(|| black_box(add(&wide, &narrow)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_render, benchmark_add);
criterion_main!(benches);
