//! Per-tick estimator telemetry.

use plume_core::Vec2;

/// Values the estimator derived from its most recent calls.
///
/// Observability only: nothing here feeds back into the ascent vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwarmTelemetry {
    /// Arithmetic mean of agent positions.
    pub centroid: Vec2,
    /// Maximum agent distance from the centroid, after flooring.
    pub formation_radius: f64,
    /// Population variance of the agents' measurements.
    pub measurement_variance: f64,
    /// Smallest singular value of the centroid-relative positions.
    pub degeneration_index: f64,
}
