//! Simulation configuration and validation.
//!
//! [`SimulationConfig`] is the input for constructing a
//! [`LockstepSwarm`](crate::LockstepSwarm). [`validate()`](SimulationConfig::validate)
//! checks every parameter before any agent is placed, so a bad value is
//! reported as a [`ConfigError`] instead of surfacing as NaN positions
//! mid-run.

use plume_agents::{MotionLaw, ZeroAscentPolicy};
use plume_core::ConfigError;
use plume_estimator::DEFAULT_DEGENERACY_THRESHOLD;
use plume_field::FieldConfig;

/// Default integration timestep.
pub const DEFAULT_TIMESTEP: f64 = 0.1;
/// Default number of agents.
pub const DEFAULT_SWARM_SIZE: usize = 3;
/// Default half-width of the square the initial centroid is drawn from.
pub const DEFAULT_CENTROID_BOUND: f64 = 15.0;
/// Default standard deviation of each agent's offset from the centroid.
pub const DEFAULT_GEOMETRY_SPREAD: f64 = 2.0;

// ── HeadingInit ─────────────────────────────────────────────────

/// How unicycle agents get their initial heading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HeadingInit {
    /// Drawn uniformly from `[-π, π)` on the geometry stream, right after
    /// the agent's offset.
    #[default]
    Uniform,
    /// The same heading for every agent. Consumes no randomness.
    Fixed(f64),
}

// ── DeploymentConfig ────────────────────────────────────────────

/// Swarm size, motion law, and seeded initial placement.
///
/// Placement uses two independent streams: `centroid_seed` picks where
/// the swarm starts, `geometry_seed` picks the formation around it.
/// Changing one never perturbs the other.
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentConfig {
    /// Number of agents. Must be at least 1. Default: 3.
    pub swarm_size: usize,
    /// Kinematic model for every agent. Default: unicycle.
    pub motion_law: MotionLaw,
    /// Unicycle forward speed `u_r`. Ignored for holonomic swarms. Default: 2.0.
    pub speed: f64,
    /// Unicycle angular gain `k_γ`. Ignored for holonomic swarms. Default: 0.5.
    pub gain: f64,
    /// Unicycle behaviour when the ascent vector vanishes.
    pub zero_ascent: ZeroAscentPolicy,
    /// Seed for the centroid stream.
    pub centroid_seed: u64,
    /// Seed for the geometry stream (offsets and headings).
    pub geometry_seed: u64,
    /// The centroid is drawn from `[-centroid_bound, centroid_bound)²`. Default: 15.
    pub centroid_bound: f64,
    /// Per-axis standard deviation of agent offsets. Default: 2.0.
    pub geometry_spread: f64,
    /// Initial unicycle heading.
    pub heading: HeadingInit,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            swarm_size: DEFAULT_SWARM_SIZE,
            motion_law: MotionLaw::default(),
            speed: 2.0,
            gain: 0.5,
            zero_ascent: ZeroAscentPolicy::default(),
            centroid_seed: 0,
            geometry_seed: 0,
            centroid_bound: DEFAULT_CENTROID_BOUND,
            geometry_spread: DEFAULT_GEOMETRY_SPREAD,
            heading: HeadingInit::default(),
        }
    }
}

impl DeploymentConfig {
    /// Check all deployment parameters.
    ///
    /// Speed and gain are only checked for unicycle swarms.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.swarm_size == 0 {
            return Err(ConfigError::EmptySwarm);
        }
        if u32::try_from(self.swarm_size).is_err() {
            return Err(ConfigError::SwarmTooLarge {
                size: self.swarm_size,
            });
        }
        if self.motion_law == MotionLaw::Unicycle {
            if !self.speed.is_finite() || self.speed <= 0.0 {
                return Err(ConfigError::InvalidSpeed { value: self.speed });
            }
            if !self.gain.is_finite() || self.gain <= 0.0 {
                return Err(ConfigError::InvalidGain { value: self.gain });
            }
            if let HeadingInit::Fixed(h) = self.heading {
                if !h.is_finite() {
                    return Err(ConfigError::InvalidHeading { value: h });
                }
            }
        }
        if !self.centroid_bound.is_finite() || self.centroid_bound <= 0.0 {
            return Err(ConfigError::InvalidBound {
                value: self.centroid_bound,
            });
        }
        if !self.geometry_spread.is_finite() || self.geometry_spread < 0.0 {
            return Err(ConfigError::InvalidGeometrySpread {
                value: self.geometry_spread,
            });
        }
        Ok(())
    }
}

// ── SimulationConfig ────────────────────────────────────────────

/// Everything needed to build a [`LockstepSwarm`](crate::LockstepSwarm).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Scalar field parameters and seed.
    pub field: FieldConfig,
    /// Swarm parameters and seeds.
    pub deployment: DeploymentConfig,
    /// Integration timestep. Must be finite and positive. Default: 0.1.
    pub dt: f64,
    /// Cut-off for the per-tick degeneracy check. Default: 1e-3.
    pub degeneracy_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            deployment: DeploymentConfig::default(),
            dt: DEFAULT_TIMESTEP,
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
        }
    }
}

impl SimulationConfig {
    /// Default parameters with all three seeds set.
    pub fn seeded(field_seed: u64, centroid_seed: u64, geometry_seed: u64) -> Self {
        Self {
            field: FieldConfig::with_seed(field_seed),
            deployment: DeploymentConfig {
                centroid_seed,
                geometry_seed,
                ..DeploymentConfig::default()
            },
            ..Self::default()
        }
    }

    /// Check the timestep, threshold, field, and deployment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_timestep(self.dt)?;
        validate_threshold(self.degeneracy_threshold)?;
        self.field.validate()?;
        self.deployment.validate()
    }
}

pub(crate) fn validate_timestep(dt: f64) -> Result<(), ConfigError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(ConfigError::InvalidTimestep { value: dt });
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<(), ConfigError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigError::InvalidThreshold { value: threshold });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
        let cfg = SimulationConfig::seeded(42, 3, 101);
        assert_eq!(cfg.field.seed, 42);
        assert_eq!(cfg.deployment.centroid_seed, 3);
        assert_eq!(cfg.deployment.geometry_seed, 101);
        assert_eq!(cfg.dt, DEFAULT_TIMESTEP);
    }

    #[test]
    fn rejects_bad_timestep() {
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let cfg = SimulationConfig {
                dt,
                ..SimulationConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidTimestep { .. })),
                "dt = {dt}"
            );
        }
    }

    #[test]
    fn rejects_empty_swarm() {
        let mut cfg = SimulationConfig::default();
        cfg.deployment.swarm_size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptySwarm));
    }

    #[test]
    fn rejects_swarm_beyond_id_range() {
        let mut cfg = SimulationConfig::default();
        cfg.deployment.swarm_size = u32::MAX as usize;
        assert_eq!(cfg.validate(), Ok(()));

        if let Some(size) = (u32::MAX as usize).checked_add(1) {
            cfg.deployment.swarm_size = size;
            assert_eq!(cfg.validate(), Err(ConfigError::SwarmTooLarge { size }));
        }
    }

    #[test]
    fn rejects_bad_unicycle_parameters() {
        let mut cfg = SimulationConfig::default();
        cfg.deployment.speed = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidSpeed { value: 0.0 }));

        let mut cfg = SimulationConfig::default();
        cfg.deployment.gain = -1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidGain { value: -1.0 }));

        let mut cfg = SimulationConfig::default();
        cfg.deployment.heading = HeadingInit::Fixed(f64::INFINITY);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidHeading { .. })
        ));
    }

    #[test]
    fn holonomic_ignores_unicycle_parameters() {
        let mut cfg = SimulationConfig::default();
        cfg.deployment.motion_law = MotionLaw::Holonomic;
        cfg.deployment.speed = -5.0;
        cfg.deployment.gain = f64::NAN;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_placement() {
        let mut cfg = SimulationConfig::default();
        cfg.deployment.centroid_bound = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidBound { value: 0.0 }));

        let mut cfg = SimulationConfig::default();
        cfg.deployment.geometry_spread = -1.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidGeometrySpread { value: -1.0 })
        );

        // Zero spread is allowed: all agents start on the centroid.
        let mut cfg = SimulationConfig::default();
        cfg.deployment.geometry_spread = 0.0;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_threshold_and_field() {
        let cfg = SimulationConfig {
            degeneracy_threshold: -1e-3,
            ..SimulationConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidThreshold { value: -1e-3 })
        );

        let mut cfg = SimulationConfig::default();
        cfg.field.spread = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidSpread { value: 0.0 }));
    }
}
