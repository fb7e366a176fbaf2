//! Benchmarks for voxel container loading.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use u_loading_core::solver::Solver;
use u_loading_d3::{ContainerSpec, Item, Loader3D};

fn uniform_cubes(n: usize, side: usize) -> Vec<Item> {
    (1..=n)
        .map(|i| Item::new(format!("{}", i), side, side, side, 5.0))
        .collect()
}

fn loader_benchmark(c: &mut Criterion) {
    let spec = ContainerSpec::new(30, 30, 30);
    let loader = Loader3D::default_config();

    c.bench_function("load_270_cubes_into_10_containers", |b| {
        b.iter(|| {
            let mut items = uniform_cubes(270, 10);
            let result = loader.solve(black_box(&mut items), black_box(&spec));
            black_box(result)
        })
    });

    let mixed_spec = ContainerSpec::new(45, 40, 35);
    c.bench_function("load_mixed_500", |b| {
        b.iter(|| {
            let mut items: Vec<Item> = (1..=300)
                .map(|i| Item::new(format!("{}", i), 10, 9, 5, 5.0))
                .chain((301..=500).map(|i| Item::new(format!("{}", i), 5, 4, 3, 5.0)))
                .collect();
            let result = loader.solve(black_box(&mut items), black_box(&mixed_spec));
            black_box(result)
        })
    });
}

criterion_group!(benches, loader_benchmark);
criterion_main!(benches);
