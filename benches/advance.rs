//! Benchmarks for the CPU particle pool.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use fountain::ParticleSystem;

fn steady_pool(size: u32) -> ParticleSystem {
    let mut system = ParticleSystem::new();
    system.spawn(size, &mut SmallRng::seed_from_u64(0));
    system
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || steady_pool(size),
                |mut system| {
                    system.advance(black_box(1.0 / 60.0));
                    system
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_spawn(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    group.bench_function("400_per_tick", |b| {
        let mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| {
            let mut system = ParticleSystem::new();
            system.spawn(black_box(400), &mut rng);
            system
        })
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_spawn);
criterion_main!(benches);
