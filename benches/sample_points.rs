//! Benchmarks for surface sampling and particle stepping.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trefoil::{EmitterConfig, ParticleSystem, SurfaceSampler};

fn bench_surface_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_sampling");

    let sampler = SurfaceSampler::trefoil();
    for density in [0.2f32, 0.1, 0.05] {
        group.bench_with_input(
            BenchmarkId::new("trefoil", density.to_string()),
            &density,
            |b, &density| {
                b.iter(|| {
                    let mut last = glam::Vec3::ZERO;
                    for p in sampler.sample(density, 48.0).unwrap() {
                        last = p;
                    }
                    black_box(last)
                })
            },
        );
    }

    group.finish();
}

fn bench_particle_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_frames");

    for steady in [10u32, 100] {
        group.bench_with_input(
            BenchmarkId::new("spawn_step", steady),
            &steady,
            |b, &steady| {
                b.iter(|| {
                    let config = EmitterConfig::new()
                        .burst_probability(0.5)
                        .steady_rate(steady)
                        .lifetime(60)
                        .seed(9);
                    let mut sys = ParticleSystem::new(config).unwrap();
                    for _ in 0..120 {
                        sys.spawn();
                        sys.step();
                    }
                    black_box(sys.live_count())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_surface_sampling, bench_particle_frames);
criterion_main!(benches);
