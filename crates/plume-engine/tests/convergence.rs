//! Integration test: end-to-end source seeking.
//!
//! A three-agent swarm starts in a small triangle at the origin, with
//! the Gaussian source at (5, -3), and runs through the lockstep driver.
//! The unicycle swarm overshoots and settles into a bounded orbit whose
//! windowed centroid distance stays well below the starting distance.
//! The holonomic swarm converges monotonically onto the source.
//!
//! The unicycle plateau depends on every agent starting with the same
//! heading. All agents then receive the same ascent and turn identically,
//! so the formation stays rigid. With distinct initial headings the
//! formation thins towards a line and the windowed distance can keep
//! growing; nothing here asserts convergence for that case.

use plume_agents::{HolonomicAgent, SwarmAgent, UnicycleAgent};
use plume_core::{Agent, AgentId, Vec2};
use plume_engine::LockstepSwarm;
use plume_field::GaussianField;
use plume_test_utils::equilateral_triangle;

const SOURCE: Vec2 = Vec2::new(5.0, -3.0);
const DT: f64 = 0.1;

fn field() -> GaussianField {
    GaussianField::at_source(SOURCE, 100.0, 10.0).unwrap()
}

/// Shared heading keeps the formation rigid.
fn unicycle_swarm() -> LockstepSwarm {
    let agents: Vec<SwarmAgent> = equilateral_triangle(Vec2::ZERO, 0.5)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            UnicycleAgent::builder(AgentId(i as u32), p)
                .heading(0.0)
                .speed(2.0)
                .gain(0.5)
                .build()
                .unwrap()
                .into()
        })
        .collect();
    LockstepSwarm::from_parts(field(), agents, DT).unwrap()
}

fn holonomic_swarm() -> LockstepSwarm {
    let agents: Vec<SwarmAgent> = equilateral_triangle(Vec2::ZERO, 0.5)
        .into_iter()
        .enumerate()
        .map(|(i, p)| HolonomicAgent::new(AgentId(i as u32), p).unwrap().into())
        .collect();
    LockstepSwarm::from_parts(field(), agents, DT).unwrap()
}

/// Centroid-to-source distance after each of `ticks` ticks.
fn distances(swarm: &mut LockstepSwarm, ticks: usize) -> Vec<f64> {
    (0..ticks)
        .map(|_| {
            swarm.step_sync().unwrap();
            swarm.centroid().distance(SOURCE)
        })
        .collect()
}

fn window_means(d: &[f64], width: usize) -> Vec<f64> {
    d.chunks(width)
        .map(|w| w.iter().sum::<f64>() / w.len() as f64)
        .collect()
}

#[test]
fn unicycle_swarm_approaches_source_then_plateaus() {
    let mut swarm = unicycle_swarm();
    let initial = swarm.centroid().distance(SOURCE);
    assert!((initial - 34.0f64.sqrt()).abs() < 1e-9);

    let d = distances(&mut swarm, 300);
    let windows = window_means(&d, 10);

    // Approach phase: the first windows shrink strictly.
    assert!(
        windows[0] > windows[1] && windows[1] > windows[2],
        "windows: {:?}",
        &windows[..3]
    );
    assert!(windows[0] < initial);

    // Settled phase: bounded orbit well inside the starting distance.
    let late: f64 = d[200..].iter().sum::<f64>() / 100.0;
    assert!(late < 0.6 * initial, "late mean {late}, initial {initial}");
    let worst = d[30..].iter().copied().fold(0.0, f64::max);
    assert!(worst < initial, "max after approach {worst}");
}

#[test]
fn unicycle_swarm_keeps_constant_speed_and_rigid_formation() {
    let mut swarm = unicycle_swarm();
    let before: Vec<Vec2> = swarm.agents().iter().map(Agent::position).collect();
    swarm.step_sync().unwrap();
    for (agent, start) in swarm.agents().iter().zip(&before) {
        let step = agent.position().distance(*start);
        assert!((step - 2.0 * DT).abs() < 1e-12, "step {step}");
    }

    // Shared heading, shared ascent: every agent turns identically.
    swarm.run(10.0).unwrap();
    let headings: Vec<f64> = swarm
        .agents()
        .iter()
        .filter_map(SwarmAgent::heading)
        .collect();
    assert_eq!(headings.len(), 3);
    assert!(headings.iter().all(|h| h.to_bits() == headings[0].to_bits()));
}

#[test]
fn unicycle_formation_stays_non_degenerate() {
    let mut swarm = unicycle_swarm();
    for result in swarm.run(20.0).unwrap() {
        assert!(result.non_degenerate, "tick {}", result.tick_id);
        assert!((result.telemetry.formation_radius - 0.5).abs() < 1e-9);
    }
}

#[test]
fn holonomic_swarm_converges_monotonically() {
    let mut swarm = holonomic_swarm();
    let d = distances(&mut swarm, 200);
    assert!(
        d.windows(2).all(|w| w[1] < w[0]),
        "distance must shrink every tick"
    );
    assert!(d[49] < 1.0, "tick 50: {}", d[49]);
    assert!(d[199] < 0.01, "tick 200: {}", d[199]);
}

#[test]
fn ascent_estimate_tracks_true_gradient_direction() {
    let mut swarm = holonomic_swarm();
    let truth = swarm.field().gradient(swarm.centroid());
    let result = swarm.step_sync().unwrap();
    let cos = result.ascent.dot(truth) / (result.ascent.norm() * truth.norm());
    assert!(cos > 0.999, "cos = {cos}");
}
