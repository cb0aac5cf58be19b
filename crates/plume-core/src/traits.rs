//! Core abstraction traits for sensing and actuation.

use crate::id::AgentId;
use crate::vec2::Vec2;

/// A static scalar intensity field over the plane.
///
/// Implementations must be pure: the same point always yields the same
/// value, and evaluation never mutates the field. Fields are shared
/// read-only between every agent and the estimator.
pub trait ScalarField {
    /// Intensity of the field at `point`.
    fn intensity(&self, point: Vec2) -> f64;
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    fn intensity(&self, point: Vec2) -> f64 {
        (**self).intensity(point)
    }
}

/// A mobile agent that can sample a field and move under its own
/// actuation constraints.
///
/// All agents share the same sensing contract; each motion law decides
/// how an ascent vector is turned into motion.
pub trait Agent {
    /// Stable identifier assigned at deployment.
    fn id(&self) -> AgentId;

    /// Current position. Returned by value, so callers never alias
    /// the agent's internal state.
    fn position(&self) -> Vec2;

    /// Most recent measurement recorded by [`sense`](Agent::sense).
    /// `0.0` until the agent senses for the first time.
    fn measurement(&self) -> f64;

    /// Sample `field` at the current position and store the reading,
    /// overwriting the previous measurement.
    fn sense(&mut self, field: &dyn ScalarField);

    /// Move for one timestep of length `dt` given the swarm's shared
    /// ascent vector.
    fn move_along(&mut self, ascent: Vec2, dt: f64);
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn id(&self) -> AgentId {
        (**self).id()
    }

    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn measurement(&self) -> f64 {
        (**self).measurement()
    }

    fn sense(&mut self, field: &dyn ScalarField) {
        (**self).sense(field)
    }

    fn move_along(&mut self, ascent: Vec2, dt: f64) {
        (**self).move_along(ascent, dt)
    }
}
