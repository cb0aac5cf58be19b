//! Unconstrained (holonomic) motion law.
//!
//! The agent can move in any direction instantaneously, so the ascent
//! vector is integrated directly with one explicit Euler step:
//!
//! ```text
//! position += ascent · dt
//! ```
//!
//! This is the ideal-case dynamic that constrained models are compared
//! against.

use plume_core::{Agent, AgentId, ConfigError, ScalarField, Vec2};

use crate::state::AgentState;

/// An agent with no orientation state that follows the ascent vector exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct HolonomicAgent {
    state: AgentState,
}

impl HolonomicAgent {
    /// Create an agent at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPosition`] if `position` is not finite.
    pub fn new(id: AgentId, position: Vec2) -> Result<Self, ConfigError> {
        Ok(Self {
            state: AgentState::new(id, position)?,
        })
    }

    /// Shared agent state.
    pub fn state(&self) -> &AgentState {
        &self.state
    }
}

impl Agent for HolonomicAgent {
    fn id(&self) -> AgentId {
        self.state.id()
    }

    fn position(&self) -> Vec2 {
        self.state.position()
    }

    fn measurement(&self) -> f64 {
        self.state.measurement()
    }

    fn sense(&mut self, field: &dyn ScalarField) {
        self.state.sense(field);
    }

    fn move_along(&mut self, ascent: Vec2, dt: f64) {
        self.state.position += ascent * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_test_utils::LinearField;
    use proptest::prelude::*;

    #[test]
    fn moves_along_ascent() {
        let mut agent = HolonomicAgent::new(AgentId(0), Vec2::new(1.0, 1.0)).unwrap();
        agent.move_along(Vec2::new(2.0, -4.0), 0.5);
        assert_eq!(agent.position(), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn zero_ascent_stays_put() {
        let mut agent = HolonomicAgent::new(AgentId(0), Vec2::new(-3.0, 8.0)).unwrap();
        agent.move_along(Vec2::ZERO, 0.1);
        assert_eq!(agent.position(), Vec2::new(-3.0, 8.0));
    }

    #[test]
    fn position_is_a_copy() {
        let mut agent = HolonomicAgent::new(AgentId(0), Vec2::ZERO).unwrap();
        let before = agent.position();
        agent.move_along(Vec2::new(1.0, 0.0), 1.0);
        assert_eq!(before, Vec2::ZERO);
        assert_eq!(agent.position(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn moving_does_not_touch_measurement() {
        let mut agent = HolonomicAgent::new(AgentId(0), Vec2::new(1.0, 0.0)).unwrap();
        agent.sense(&LinearField::new(0.0, Vec2::new(10.0, 0.0)));
        agent.move_along(Vec2::new(5.0, 5.0), 1.0);
        assert_eq!(agent.measurement(), 10.0);
    }

    proptest! {
        #[test]
        fn move_is_exactly_linear(
            px in -1e6f64..1e6, py in -1e6f64..1e6,
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            dt in 1e-6f64..10.0,
        ) {
            let start = Vec2::new(px, py);
            let ascent = Vec2::new(ax, ay);
            let mut agent = HolonomicAgent::new(AgentId(0), start).unwrap();
            agent.move_along(ascent, dt);
            let expected = Vec2::new(px + ax * dt, py + ay * dt);
            prop_assert_eq!(agent.position().x.to_bits(), expected.x.to_bits());
            prop_assert_eq!(agent.position().y.to_bits(), expected.y.to_bits());
        }
    }
}
