//! Criterion micro-benchmarks for the swarm estimator and degeneracy index.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use plume_bench::stress_profile;
use plume_core::{Agent, ScalarField, Vec2};
use plume_engine::deploy_swarm;
use plume_estimator::{smallest_singular_value, SwarmEstimator};
use plume_field::GaussianField;

fn sensed_stress_swarm() -> Vec<plume_agents::SwarmAgent> {
    let config = stress_profile(42);
    let field = GaussianField::from_config(&config.field).unwrap();
    let mut agents = deploy_swarm(&config.deployment).unwrap();
    for agent in &mut agents {
        agent.sense(&field);
    }
    agents
}

fn bench_ascent_10k(c: &mut Criterion) {
    let agents = sensed_stress_swarm();
    c.bench_function("ascent_10k", |b| {
        b.iter(|| {
            let mut estimator = SwarmEstimator::new(black_box(&agents[..]));
            black_box(estimator.calculate_ascent_direction().unwrap());
        });
    });
}

fn bench_degeneracy_10k(c: &mut Criterion) {
    let agents = sensed_stress_swarm();
    c.bench_function("degeneracy_check_10k", |b| {
        b.iter(|| {
            let mut estimator = SwarmEstimator::new(black_box(&agents[..]));
            black_box(estimator.check_non_degeneracy());
        });
    });
}

fn bench_singular_value_raw(c: &mut Criterion) {
    let agents = sensed_stress_swarm();
    let n = agents.len() as f64;
    let centroid = agents.iter().map(Agent::position).sum::<Vec2>() / n;
    let offsets: Vec<Vec2> = agents.iter().map(|a| a.position() - centroid).collect();
    c.bench_function("smallest_singular_value_10k", |b| {
        b.iter(|| black_box(smallest_singular_value(black_box(&offsets).iter().copied())));
    });
}

fn bench_field_intensity(c: &mut Criterion) {
    let config = stress_profile(42);
    let field = GaussianField::from_config(&config.field).unwrap();
    let agents = sensed_stress_swarm();
    c.bench_function("gaussian_intensity_10k", |b| {
        b.iter(|| {
            let total: f64 = agents.iter().map(|a| field.intensity(a.position())).sum();
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_ascent_10k,
    bench_degeneracy_10k,
    bench_singular_value_raw,
    bench_field_intensity
);
criterion_main!(benches);
