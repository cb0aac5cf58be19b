//! Seeded swarm deployment.
//!
//! Two ChaCha8 streams, each seeded once per deployment:
//!
//! - **centroid stream** (`centroid_seed`): two uniform draws give the
//!   swarm centroid `r_c ~ U([-b, b)²)`.
//! - **geometry stream** (`geometry_seed`): for agent `i = 0..N`, two
//!   Gaussian draws give its offset `x_i ~ N(0, s²)` per axis, then, for
//!   unicycle swarms with [`HeadingInit::Uniform`], one uniform draw in
//!   `[-π, π)` gives its heading.
//!
//! Agent `i` starts at `r_c + x_i`. The draw order is part of the
//! reproducibility contract: reordering it changes every trajectory.

use std::f64::consts::PI;

use plume_agents::{HolonomicAgent, MotionLaw, SwarmAgent, UnicycleAgent};
use plume_core::{AgentId, ConfigError, Vec2};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::{DeploymentConfig, HeadingInit};

/// Sample the initial centroid from the centroid stream.
pub fn initial_centroid(config: &DeploymentConfig) -> Vec2 {
    let mut rng = ChaCha8Rng::seed_from_u64(config.centroid_seed);
    let bound = config.centroid_bound;
    let x = rng.random_range(-bound..bound);
    let y = rng.random_range(-bound..bound);
    Vec2::new(x, y)
}

/// Build the swarm described by `config`.
///
/// Agents get sequential ids `0..swarm_size`.
///
/// # Errors
///
/// Returns `Err` if `config` fails [`DeploymentConfig::validate`], or if
/// a sampled position is not finite.
pub fn deploy_swarm(config: &DeploymentConfig) -> Result<Vec<SwarmAgent>, ConfigError> {
    config.validate()?;

    let centroid = initial_centroid(config);
    let mut rng = ChaCha8Rng::seed_from_u64(config.geometry_seed);
    let spread = config.geometry_spread;

    let mut agents = Vec::with_capacity(config.swarm_size);
    for i in 0..config.swarm_size {
        let id = u32::try_from(i)
            .map(AgentId)
            .map_err(|_| ConfigError::SwarmTooLarge {
                size: config.swarm_size,
            })?;
        let offset = Vec2::new(spread * box_muller(&mut rng), spread * box_muller(&mut rng));
        let position = centroid + offset;

        let agent = match config.motion_law {
            MotionLaw::Holonomic => HolonomicAgent::new(id, position)?.into(),
            MotionLaw::Unicycle => {
                let heading = match config.heading {
                    HeadingInit::Uniform => rng.random_range(-PI..PI),
                    HeadingInit::Fixed(h) => h,
                };
                UnicycleAgent::builder(id, position)
                    .heading(heading)
                    .speed(config.speed)
                    .gain(config.gain)
                    .zero_ascent(config.zero_ascent)
                    .build()?
                    .into()
            }
        };
        agents.push(agent);
    }
    Ok(agents)
}

/// Standard normal sample via the Box-Muller transform.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
