//! Lockstep (synchronous) swarm driver.
//!
//! [`LockstepSwarm`] owns the field and the agents and advances them one
//! tick per [`step_sync()`](LockstepSwarm::step_sync) call:
//!
//! 1. every agent senses the field at its current position
//! 2. one [`SwarmEstimator`] borrows the swarm and produces the ascent vector
//! 3. the borrow ends, and every agent moves along that same vector
//!
//! No agent moves before all have sensed, and all agents see the same
//! ascent vector within a tick.
//!
//! # Rollback
//!
//! If any agent ends the tick at a non-finite position, the whole tick
//! is discarded: agents are restored to their pre-tick state, the tick
//! counter does not advance, and [`StepError::NonFinitePosition`] is
//! returned.

use std::fmt;
use std::time::Instant;

use plume_agents::SwarmAgent;
use plume_core::{Agent, ConfigError, EstimateError, ScalarField, StepError, TickId, Vec2};
use plume_estimator::{SwarmEstimator, SwarmTelemetry, DEFAULT_DEGENERACY_THRESHOLD};
use plume_field::GaussianField;
use tracing::{debug, info, warn};

use crate::config::{validate_threshold, validate_timestep, SimulationConfig};
use crate::deploy::deploy_swarm;
use crate::metrics::StepMetrics;

// Compile-time assertion: the default driver can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LockstepSwarm>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`LockstepSwarm::step_sync()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// The tick that just completed.
    pub tick_id: TickId,
    /// Ascent vector every agent moved along this tick.
    pub ascent: Vec2,
    /// Estimator telemetry from the sensing snapshot (pre-move positions).
    pub telemetry: SwarmTelemetry,
    /// Whether the formation passed the degeneracy check this tick.
    pub non_degenerate: bool,
    /// Performance metrics for this tick.
    pub metrics: StepMetrics,
}

// ── LockstepSwarm ───────────────────────────────────────────────

/// Single-threaded driver for a swarm seeking the source of a field.
///
/// Built from a [`SimulationConfig`] via [`new()`](LockstepSwarm::new),
/// or from an explicit field and agent set via
/// [`from_parts()`](LockstepSwarm::from_parts).
///
/// # Example
///
/// ```
/// use plume_engine::{LockstepSwarm, SimulationConfig};
///
/// let mut swarm = LockstepSwarm::new(SimulationConfig::seeded(42, 3, 101)).unwrap();
/// let results = swarm.run(1.0).unwrap();
/// assert_eq!(results.len(), 10);
/// assert_eq!(swarm.tick_id().0, 10);
/// ```
pub struct LockstepSwarm<F = GaussianField, A = SwarmAgent> {
    field: F,
    agents: Vec<A>,
    dt: f64,
    degeneracy_threshold: f64,
    tick_id: TickId,
    degenerate: bool,
    rollback_events: u64,
    last_metrics: StepMetrics,
}

impl LockstepSwarm {
    /// Create a swarm from a [`SimulationConfig`].
    ///
    /// Validates the configuration, samples the field source, and deploys
    /// the agents. Consumes the config.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = GaussianField::from_config(&config.field)?;
        let agents = deploy_swarm(&config.deployment)?;

        let swarm = Self::from_parts(field, agents, config.dt)?
            .with_degeneracy_threshold(config.degeneracy_threshold)?;
        let source = swarm.field.source();
        info!(
            agents = swarm.agents.len(),
            motion_law = ?config.deployment.motion_law,
            field_seed = config.field.seed,
            centroid_seed = config.deployment.centroid_seed,
            geometry_seed = config.deployment.geometry_seed,
            source = ?source,
            centroid = ?swarm.centroid(),
            dt = config.dt,
            "Swarm deployed"
        );
        Ok(swarm)
    }
}

impl<F: ScalarField, A: Agent + Clone> LockstepSwarm<F, A> {
    /// Create a swarm from an explicit field and agent set.
    ///
    /// Uses the default degeneracy threshold.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `agents` is empty, an agent starts at a
    /// non-finite position, or `dt` is not finite and positive.
    pub fn from_parts(field: F, agents: Vec<A>, dt: f64) -> Result<Self, ConfigError> {
        validate_timestep(dt)?;
        if agents.is_empty() {
            return Err(ConfigError::EmptySwarm);
        }
        if let Some(agent) = agents.iter().find(|a| !a.position().is_finite()) {
            return Err(ConfigError::InvalidPosition { agent: agent.id() });
        }
        Ok(Self {
            field,
            agents,
            dt,
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
            tick_id: TickId::default(),
            degenerate: false,
            rollback_events: 0,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Replace the degeneracy threshold used by the per-tick check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] if `threshold` is
    /// negative or not finite.
    pub fn with_degeneracy_threshold(mut self, threshold: f64) -> Result<Self, ConfigError> {
        validate_threshold(threshold)?;
        self.degeneracy_threshold = threshold;
        Ok(self)
    }

    /// Execute one sense → estimate → move tick.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NonFinitePosition`] if an agent would leave
    /// the finite plane; the tick is rolled back and may be inspected.
    /// [`StepError::Estimate`] is unreachable for a swarm built through
    /// the constructors, which reject empty agent sets.
    pub fn step_sync(&mut self) -> Result<StepResult, StepError> {
        let tick_start = Instant::now();
        let next_tick = self.tick_id.next();
        let checkpoint = self.agents.clone();

        // 1. Sense.
        let sense_start = Instant::now();
        for agent in &mut self.agents {
            agent.sense(&self.field);
        }
        let sense_us = sense_start.elapsed().as_micros() as u64;

        // 2. Estimate. The estimator's borrow ends with this block.
        let estimate_start = Instant::now();
        let (ascent, telemetry, non_degenerate) =
            match estimate(&self.agents, self.degeneracy_threshold) {
                Ok(v) => v,
                Err(e) => {
                    self.agents = checkpoint;
                    return Err(e.into());
                }
            };
        let estimate_us = estimate_start.elapsed().as_micros() as u64;

        // 3. Move.
        let move_start = Instant::now();
        for agent in &mut self.agents {
            agent.move_along(ascent, self.dt);
        }
        let move_us = move_start.elapsed().as_micros() as u64;

        // 4. Roll back if anyone left the finite plane.
        if let Some(agent) = self
            .agents
            .iter()
            .find(|a| !a.position().is_finite())
            .map(Agent::id)
        {
            self.agents = checkpoint;
            self.rollback_events += 1;
            warn!(
                tick = next_tick.0,
                agent = agent.0,
                ascent = ?ascent,
                "Non-finite agent position, tick rolled back"
            );
            return Err(StepError::NonFinitePosition {
                agent,
                tick: next_tick,
            });
        }

        // 5. Commit.
        self.tick_id = next_tick;
        if !non_degenerate && !self.degenerate {
            warn!(
                tick = next_tick.0,
                degeneration_index = telemetry.degeneration_index,
                threshold = self.degeneracy_threshold,
                "Formation became degenerate, ascent estimate unreliable"
            );
        } else if non_degenerate && self.degenerate {
            debug!(tick = next_tick.0, "Formation no longer degenerate");
        }
        self.degenerate = !non_degenerate;

        let metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            sense_us,
            estimate_us,
            move_us,
            agent_count: self.agents.len(),
            rollback_events: self.rollback_events,
        };
        self.last_metrics = metrics.clone();

        debug!(
            tick = next_tick.0,
            centroid = ?telemetry.centroid,
            ascent_norm = ascent.norm(),
            formation_radius = telemetry.formation_radius,
            "Tick complete"
        );

        Ok(StepResult {
            tick_id: next_tick,
            ascent,
            telemetry,
            non_degenerate,
            metrics,
        })
    }

    /// Run `floor(total_time / dt)` ticks and collect their results.
    ///
    /// A non-positive or non-finite `total_time` runs no ticks.
    ///
    /// # Errors
    ///
    /// Stops at the first failing tick and returns its error. Ticks that
    /// completed before it stay applied.
    pub fn run(&mut self, total_time: f64) -> Result<Vec<StepResult>, StepError> {
        let ticks = tick_count(total_time, self.dt);
        let mut results = Vec::new();
        for _ in 0..ticks {
            results.push(self.step_sync()?);
        }
        Ok(results)
    }

    /// The agents, in id order.
    pub fn agents(&self) -> &[A] {
        &self.agents
    }

    /// The field being sampled.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Number of completed ticks (0 after construction).
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// The integration timestep.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// The degeneracy threshold used by the per-tick check.
    pub fn degeneracy_threshold(&self) -> f64 {
        self.degeneracy_threshold
    }

    /// Mean of the current agent positions.
    pub fn centroid(&self) -> Vec2 {
        let sum: Vec2 = self.agents.iter().map(Agent::position).sum();
        sum / self.agents.len() as f64
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Number of ticks rolled back so far.
    pub fn rollback_count(&self) -> u64 {
        self.rollback_events
    }
}

impl<F, A> fmt::Debug for LockstepSwarm<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockstepSwarm")
            .field("tick_id", &self.tick_id)
            .field("agents", &self.agents.len())
            .field("dt", &self.dt)
            .field("degenerate", &self.degenerate)
            .finish()
    }
}

fn estimate<A: Agent>(
    agents: &[A],
    threshold: f64,
) -> Result<(Vec2, SwarmTelemetry, bool), EstimateError> {
    let mut estimator = SwarmEstimator::new(agents).with_degeneracy_threshold(threshold);
    let ascent = estimator.calculate_ascent_direction()?;
    let non_degenerate = estimator.check_non_degeneracy();
    Ok((ascent, estimator.telemetry(), non_degenerate))
}

fn tick_count(total_time: f64, dt: f64) -> u64 {
    let ticks = (total_time / dt).floor();
    if ticks.is_finite() && ticks > 0.0 {
        ticks as u64
    } else {
        0
    }
}
