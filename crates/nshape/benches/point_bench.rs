//! Criterion benchmarks for point algebra and n-spherical conversion.
//! Focus dims: {3, 8, 32, 128}.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nshape::polar::{from_n_spherical, to_n_spherical};
use nshape::sample::{random_angles, random_point};
use rand::{rngs::StdRng, SeedableRng};

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point");
    for &dim in &[3usize, 8, 32, 128] {
        let mut rng = StdRng::seed_from_u64(7);
        let p = random_point(dim, 10.0, &mut rng);
        let q = random_point(dim, 10.0, &mut rng);

        group.bench_with_input(BenchmarkId::new("add", dim), &dim, |b, _| {
            b.iter(|| black_box(&p + &q))
        });
        group.bench_with_input(BenchmarkId::new("distance", dim), &dim, |b, _| {
            b.iter(|| black_box(p.distance(&q)))
        });
    }
    group.finish();
}

fn bench_n_spherical(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_spherical");
    for &dim in &[3usize, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("from", dim), &dim, |b, &dim| {
            let mut rng = StdRng::seed_from_u64(11);
            b.iter_batched(
                || random_angles(dim - 1, &mut rng),
                |angles| black_box(from_n_spherical(2.0, &angles).unwrap()),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("to", dim), &dim, |b, &dim| {
            let mut rng = StdRng::seed_from_u64(12);
            b.iter_batched(
                || random_point(dim, 5.0, &mut rng),
                |p| black_box(to_n_spherical(&p).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_point, bench_n_spherical);
criterion_main!(benches);
