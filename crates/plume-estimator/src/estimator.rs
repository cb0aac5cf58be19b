//! Weighted-moment gradient estimator.
//!
//! Turns the swarm's instantaneous (position, measurement) snapshot into
//! one ascent vector:
//!
//! ```text
//! r_c = (1/N) Σ rᵢ
//! D   = max ‖rᵢ − r_c‖
//! L̂   = (1 / (N · D²)) · Σ σᵢ (rᵢ − r_c)
//! ```
//!
//! For a field that is linear across the formation, `Σ σᵢ (rᵢ − r_c)`
//! equals `(Σ xᵢ xᵢᵀ) ∇σ`, so the estimate points along the gradient
//! when the formation is isotropic. The `D²` normalization makes the
//! magnitude independent of formation scale. Accuracy degrades as `D`
//! grows relative to the field's curvature scale.
//!
//! Nothing carries over between ticks: every call recomputes the
//! centroid, `D`, and the diagnostics from the borrowed agents.

use plume_core::{Agent, EstimateError, Vec2};

use crate::degeneracy::{smallest_singular_value, DEFAULT_DEGENERACY_THRESHOLD};
use crate::telemetry::SwarmTelemetry;

/// Nominal formation radius used when the swarm is empty or all agents
/// coincide.
pub const DEFAULT_FORMATION_RADIUS: f64 = 1.0;

/// Swarm-level ascent estimator over a borrowed set of agents.
///
/// The estimator never owns, copies, or mutates the agents. Its mutable
/// state is telemetry from the most recent call.
///
/// # Example
///
/// ```
/// use plume_core::{AgentId, Vec2};
/// use plume_agents::HolonomicAgent;
/// use plume_estimator::SwarmEstimator;
///
/// let agents = vec![
///     HolonomicAgent::new(AgentId(0), Vec2::new(0.0, 1.0)).unwrap(),
///     HolonomicAgent::new(AgentId(1), Vec2::new(-1.0, -1.0)).unwrap(),
///     HolonomicAgent::new(AgentId(2), Vec2::new(1.0, -1.0)).unwrap(),
/// ];
/// let mut estimator = SwarmEstimator::new(&agents);
/// // No agent has sensed yet, so every measurement is zero.
/// assert_eq!(estimator.calculate_ascent_direction().unwrap(), Vec2::ZERO);
/// assert!(estimator.check_non_degeneracy());
/// ```
#[derive(Debug)]
pub struct SwarmEstimator<'a, A> {
    agents: &'a [A],
    degeneracy_threshold: f64,
    centroid: Vec2,
    formation_radius: f64,
    measurement_variance: f64,
    degeneration_index: f64,
}

impl<'a, A: Agent> SwarmEstimator<'a, A> {
    /// Create an estimator over `agents` with the default degeneracy
    /// threshold.
    pub fn new(agents: &'a [A]) -> Self {
        Self {
            agents,
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
            centroid: Vec2::ZERO,
            formation_radius: DEFAULT_FORMATION_RADIUS,
            measurement_variance: 0.0,
            degeneration_index: 0.0,
        }
    }

    /// Replace the degeneracy threshold used by
    /// [`check_non_degeneracy`](Self::check_non_degeneracy).
    ///
    /// Callers validate the value; the driver rejects negative or
    /// non-finite thresholds at construction.
    pub fn with_degeneracy_threshold(mut self, threshold: f64) -> Self {
        self.degeneracy_threshold = threshold;
        self
    }

    /// Number of agents in the snapshot.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns `true` if the snapshot has no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The threshold below which the formation counts as degenerate.
    pub fn degeneracy_threshold(&self) -> f64 {
        self.degeneracy_threshold
    }

    /// Centroid from the most recent computation.
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Formation radius `D` from the most recent ascent computation.
    pub fn formation_radius(&self) -> f64 {
        self.formation_radius
    }

    /// Measurement variance from the most recent ascent computation.
    pub fn measurement_variance(&self) -> f64 {
        self.measurement_variance
    }

    /// Snapshot of all recorded telemetry.
    pub fn telemetry(&self) -> SwarmTelemetry {
        SwarmTelemetry {
            centroid: self.centroid,
            formation_radius: self.formation_radius,
            measurement_variance: self.measurement_variance,
            degeneration_index: self.degeneration_index,
        }
    }

    fn compute_centroid(&mut self) -> Option<Vec2> {
        if self.agents.is_empty() {
            return None;
        }
        let sum: Vec2 = self.agents.iter().map(Agent::position).sum();
        self.centroid = sum / self.agents.len() as f64;
        Some(self.centroid)
    }

    fn update_formation_radius(&mut self, centroid: Vec2) -> f64 {
        let radius = self
            .agents
            .iter()
            .map(|a| a.position().distance(centroid))
            .fold(0.0, f64::max);
        // Coincident agents give D = 0; D² underflowing is just as bad.
        self.formation_radius = if radius * radius < f64::MIN_POSITIVE {
            DEFAULT_FORMATION_RADIUS
        } else {
            radius
        };
        self.formation_radius
    }

    /// Estimate the ascent direction `L̂` at the centroid.
    ///
    /// Also records the centroid, formation radius, and measurement
    /// variance as telemetry. When every agent sits at the same point the
    /// offsets are all zero and the result is the zero vector, never NaN.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::EmptySwarm`] if there are no agents.
    pub fn calculate_ascent_direction(&mut self) -> Result<Vec2, EstimateError> {
        let centroid = self.compute_centroid().ok_or(EstimateError::EmptySwarm)?;
        let radius = self.update_formation_radius(centroid);
        let n = self.agents.len() as f64;

        let weighted: Vec2 = self
            .agents
            .iter()
            .map(|a| (a.position() - centroid) * a.measurement())
            .sum();

        self.measurement_variance = population_variance(self.agents);

        Ok(weighted / (n * radius * radius))
    }

    /// Smallest singular value of the centroid-relative positions.
    ///
    /// `0.0` when fewer than three agents are present. The centroid is
    /// recomputed from the current positions, so the result does not
    /// depend on an earlier ascent computation.
    pub fn degeneration_index(&mut self) -> f64 {
        if self.agents.len() < 3 {
            self.degeneration_index = 0.0;
            return 0.0;
        }
        let Some(centroid) = self.compute_centroid() else {
            self.degeneration_index = 0.0;
            return 0.0;
        };
        self.degeneration_index =
            smallest_singular_value(self.agents.iter().map(|a| a.position() - centroid));
        self.degeneration_index
    }

    /// Returns `true` if the formation spans the plane well enough for the
    /// ascent estimate to be trusted in every direction.
    ///
    /// `false` for fewer than three agents, or when the degeneracy index
    /// is at or below the threshold.
    pub fn check_non_degeneracy(&mut self) -> bool {
        if self.agents.len() < 3 {
            self.degeneration_index = 0.0;
            return false;
        }
        self.degeneration_index() > self.degeneracy_threshold
    }
}

fn population_variance<A: Agent>(agents: &[A]) -> f64 {
    if agents.is_empty() {
        return 0.0;
    }
    let n = agents.len() as f64;
    let mean = agents.iter().map(Agent::measurement).sum::<f64>() / n;
    agents
        .iter()
        .map(|a| {
            let d = a.measurement() - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
