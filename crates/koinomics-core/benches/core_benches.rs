//! Criterion benchmarks for fixed-point rate derivation and application.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use koinomics_core::constants::{KOIN_SUPPLY, SATS_PER_KOIN};
use koinomics_core::mulshift::{MARKET_DECAY, MulShift};

fn bench_apply(c: &mut Criterion) {
    let supply_sats = KOIN_SUPPLY * SATS_PER_KOIN;

    c.bench_function("mulshift_apply", |b| {
        b.iter(|| MARKET_DECAY.apply(black_box(supply_sats)))
    });
}

fn bench_from_rate(c: &mut Criterion) {
    c.bench_function("mulshift_from_rate", |b| {
        b.iter(|| MulShift::from_rate(black_box(4.0117e-7), black_box(32)))
    });
}

fn bench_from_half_life(c: &mut Criterion) {
    c.bench_function("mulshift_from_half_life", |b| {
        b.iter(|| MulShift::from_half_life(black_box(1_728_000.0), black_box(32)))
    });
}

criterion_group!(benches, bench_apply, bench_from_rate, bench_from_half_life);
criterion_main!(benches);
