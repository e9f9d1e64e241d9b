//! Color construction and mixing benchmarks
//!
//! Run with: `cargo bench color_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swatch::presets::{BLUE, RED};
use swatch::{mix, mix_weighted, Color};

fn benchmark_constructors(c: &mut Criterion) {
    let mut group = c.benchmark_group("constructors");

    group.bench_function("from_rgb", |b| {
        b.iter(|| Color::from_rgb(black_box(156), black_box(42), black_box(42)))
    });

    group.bench_function("from_cmyk", |b| {
        b.iter(|| {
            Color::from_cmyk(
                black_box(0.1),
                black_box(0.7),
                black_box(0.7),
                black_box(0.4),
            )
        })
    });

    group.bench_function("from_hex", |b| {
        b.iter(|| Color::from_hex(black_box(0xFFA500)))
    });

    group.bench_function("parse", |b| b.iter(|| black_box("#9C2A2A").parse::<Color>()));

    group.finish();
}

fn benchmark_mixing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixing");

    group.bench_function("mix", |b| b.iter(|| mix(black_box(&*RED), black_box(&*BLUE))));

    for ratio in [0.0, 0.25, 0.5, 1.0] {
        group.bench_with_input(BenchmarkId::new("mix_weighted", ratio), &ratio, |b, &ratio| {
            b.iter(|| mix_weighted(black_box(&*RED), black_box(&*BLUE), ratio))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_constructors, benchmark_mixing);
criterion_main!(benches);
