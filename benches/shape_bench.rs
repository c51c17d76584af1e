//! Benchmarks for derived shape properties and area aggregation.
//!
//! Run with: `cargo bench --bench shape_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geom_rs::{total_area, Color, Rectangle, Shape};

/// Generate a population of rectangles with varied dimensions.
fn generate_rectangles(n: usize) -> Vec<Rectangle> {
    (0..n)
        .map(|i| {
            let phase = (i as f64) * 0.1;
            let width = 10.0 + 2.0 * phase.sin();
            let height = 5.0 + 1.5 * phase.cos();
            Rectangle::new(width, height)
        })
        .collect()
}

/// Generate a mixed population of base shapes and rectangles.
fn generate_shapes(n: usize) -> Vec<Shape> {
    (0..n)
        .map(|i| {
            if i % 4 == 0 {
                Shape::base(format!("shape-{i}"), Color::Red)
            } else {
                let phase = (i as f64) * 0.1;
                Shape::from(Rectangle::new(10.0 + phase.sin(), 5.0 + phase.cos()))
            }
        })
        .collect()
}

/// Benchmark individual derived properties.
fn bench_derived_properties(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_properties");

    let rects = generate_rectangles(1000);

    group.bench_function("area", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for r in &rects {
                total += black_box(r).area();
            }
            total
        });
    });

    group.bench_function("perimeter", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for r in &rects {
                total += black_box(r).perimeter();
            }
            total
        });
    });

    group.bench_function("dimension_lookup", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for r in &rects {
                total += black_box(r).dimension("width");
                total += black_box(r).dimension("depth");
            }
            total
        });
    });

    group.finish();
}

/// Benchmark aggregation over mixed shape collections of varying size.
fn bench_total_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_area");

    for n in [100, 1000, 10_000] {
        let shapes = generate_shapes(n);

        group.bench_with_input(BenchmarkId::new("mixed", n), &shapes, |b, shapes| {
            b.iter(|| total_area(black_box(shapes)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derived_properties, bench_total_area);
criterion_main!(benches);
