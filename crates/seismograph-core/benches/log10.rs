use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use seismograph_core::{approximate_log10, calculate_magnitude, SoilWeights};

fn bench_log10(c: &mut Criterion) {
    c.bench_function("approximate_log10 amplitude range", |b| {
        b.iter(|| {
            for amplitude in (1..=1000).step_by(37) {
                black_box(approximate_log10(black_box(f64::from(amplitude))).ok());
            }
        });
    });

    let k = SoilWeights::from_selection(true, true, true)
        .site_response()
        .unwrap_or_default();
    c.bench_function("calculate_magnitude", |b| {
        b.iter(|| calculate_magnitude(black_box(850.0), black_box(k)));
    });
}

criterion_group!(benches, bench_log10);
criterion_main!(benches);
