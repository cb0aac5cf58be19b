//! Criterion benchmarks for the lockstep sense → estimate → move tick.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use plume_bench::{reference_profile, stress_profile};
use plume_engine::LockstepSwarm;

fn bench_tick_reference(c: &mut Criterion) {
    let mut swarm = LockstepSwarm::new(reference_profile(42)).unwrap();
    swarm.step_sync().unwrap();

    c.bench_function("tick_3_unicycle", |b| {
        b.iter(|| {
            let result = swarm.step_sync().unwrap();
            black_box(&result);
        });
    });
}

fn bench_tick_10k(c: &mut Criterion) {
    let mut swarm = LockstepSwarm::new(stress_profile(42)).unwrap();
    swarm.step_sync().unwrap();

    c.bench_function("tick_10k_holonomic", |b| {
        b.iter(|| {
            let result = swarm.step_sync().unwrap();
            black_box(&result);
        });
    });
}

fn bench_1000_ticks_reference(c: &mut Criterion) {
    c.bench_function("1000_ticks_3_unicycle", |b| {
        b.iter(|| {
            let mut swarm = LockstepSwarm::new(reference_profile(42)).unwrap();
            for _ in 0..1000 {
                let result = swarm.step_sync().unwrap();
                black_box(&result);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tick_reference,
    bench_tick_10k,
    bench_1000_ticks_reference
);
criterion_main!(benches);
