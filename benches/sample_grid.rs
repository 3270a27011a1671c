use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use coulomb_field::charge::PointCharge;
use coulomb_field::sampler::{sample, ShapeDescriptor};

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let charge = PointCharge::three_d(1.0e-9, 0.1, -0.2, 0.3);

    for n in [20_usize, 100, 400] {
        let grid = ShapeDescriptor::Grid {
            x_range: (-2.0, 2.0),
            y_range: (-2.0, 2.0),
            n_points: n,
        };
        group.bench_function(BenchmarkId::new("grid", n * n), |b| {
            b.iter(|| sample(&charge, &grid).unwrap())
        });

        let shell = ShapeDescriptor::Sphere { radius: 2.0, n_points: n };
        group.bench_function(BenchmarkId::new("sphere", n * n), |b| {
            b.iter(|| sample(&charge, &shell).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
