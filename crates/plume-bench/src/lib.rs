//! Benchmark profiles for the Plume swarm simulation.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: three unicycle agents, default field
//! - [`stress_profile`]: 10K holonomic agents

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plume_agents::MotionLaw;
use plume_engine::{DeploymentConfig, SimulationConfig};
use plume_field::FieldConfig;

/// Agent count of [`stress_profile`].
pub const STRESS_SWARM_SIZE: usize = 10_000;

/// Build the reference profile: three unicycle agents, `dt = 0.1`.
///
/// The field, centroid and geometry streams are all seeded from `seed`
/// with fixed offsets so the three stay independent.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        field: FieldConfig::with_seed(seed),
        deployment: DeploymentConfig {
            centroid_seed: seed.wrapping_add(1),
            geometry_seed: seed.wrapping_add(2),
            ..DeploymentConfig::default()
        },
        ..SimulationConfig::default()
    }
}

/// Build the stress profile: [`STRESS_SWARM_SIZE`] holonomic agents.
///
/// Same field and seeds as [`reference_profile`]; only the swarm size and
/// motion law differ.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    let mut config = reference_profile(seed);
    config.deployment.swarm_size = STRESS_SWARM_SIZE;
    config.deployment.motion_law = MotionLaw::Holonomic;
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_engine::LockstepSwarm;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        let config = stress_profile(42);
        config.validate().unwrap();
        assert_eq!(config.deployment.swarm_size, STRESS_SWARM_SIZE);
    }

    #[test]
    fn reference_profile_runs() {
        let mut swarm = LockstepSwarm::new(reference_profile(42)).unwrap();
        let results = swarm.run(1.0).unwrap();
        assert_eq!(results.len(), 10);
        assert_eq!(results[9].metrics.agent_count, 3);
    }

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(reference_profile(7), reference_profile(7));
        assert_ne!(
            reference_profile(7).deployment.centroid_seed,
            reference_profile(7).deployment.geometry_seed
        );
    }
}
