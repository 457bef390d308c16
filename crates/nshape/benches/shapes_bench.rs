//! Criterion benchmarks for polytope generation and projection.
//! Brute-force edge search dominates the 4-D cells.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nshape::shapes::{Shape, ShapeKind};
use nshape::view::{Camera, Scene};
use nshape::Point;

fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("family");
    for &dim in &[3usize, 6, 10] {
        for kind in [ShapeKind::Simplex, ShapeKind::Cube, ShapeKind::CrossPolytope] {
            group.bench_with_input(BenchmarkId::new(kind.name(), dim), &dim, |b, &dim| {
                let origin = Point::zeros(dim);
                b.iter(|| black_box(Shape::new(kind, &origin).unwrap()))
            });
        }
    }
    group.finish();
}

fn bench_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("cells");
    group.sample_size(10);
    let origin = Point::zeros(4);
    for kind in [ShapeKind::Cell24, ShapeKind::Cell600, ShapeKind::Cell120] {
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(Shape::new(kind, &origin).unwrap()))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let scene = Scene::demo().unwrap();
    let camera = Camera::diagonal(0.0, 0.0).unwrap();
    c.bench_function("render_demo_scene", |b| {
        b.iter(|| black_box(scene.to_svg(&camera).unwrap()))
    });
}

criterion_group!(benches, bench_families, bench_cells, bench_render);
criterion_main!(benches);
