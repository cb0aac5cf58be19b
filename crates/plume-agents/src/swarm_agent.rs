//! One agent type covering both motion laws.

use plume_core::{Agent, AgentId, ScalarField, Vec2};

use crate::holonomic::HolonomicAgent;
use crate::unicycle::UnicycleAgent;

/// Which kinematic model a swarm is deployed with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionLaw {
    /// Free motion in any direction.
    Holonomic,
    /// Constant speed, heading-only steering.
    #[default]
    Unicycle,
}

/// An agent of either motion law, dispatched at the call site.
#[derive(Clone, Debug, PartialEq)]
pub enum SwarmAgent {
    /// See [`HolonomicAgent`].
    Holonomic(HolonomicAgent),
    /// See [`UnicycleAgent`].
    Unicycle(UnicycleAgent),
}

impl SwarmAgent {
    /// The motion law of this agent.
    pub fn motion_law(&self) -> MotionLaw {
        match self {
            Self::Holonomic(_) => MotionLaw::Holonomic,
            Self::Unicycle(_) => MotionLaw::Unicycle,
        }
    }

    /// Heading of a unicycle agent; `None` for holonomic agents, which
    /// carry no orientation.
    pub fn heading(&self) -> Option<f64> {
        match self {
            Self::Holonomic(_) => None,
            Self::Unicycle(a) => Some(a.heading()),
        }
    }
}

impl From<HolonomicAgent> for SwarmAgent {
    fn from(agent: HolonomicAgent) -> Self {
        Self::Holonomic(agent)
    }
}

impl From<UnicycleAgent> for SwarmAgent {
    fn from(agent: UnicycleAgent) -> Self {
        Self::Unicycle(agent)
    }
}

impl Agent for SwarmAgent {
    fn id(&self) -> AgentId {
        match self {
            Self::Holonomic(a) => a.id(),
            Self::Unicycle(a) => a.id(),
        }
    }

    fn position(&self) -> Vec2 {
        match self {
            Self::Holonomic(a) => a.position(),
            Self::Unicycle(a) => a.position(),
        }
    }

    fn measurement(&self) -> f64 {
        match self {
            Self::Holonomic(a) => a.measurement(),
            Self::Unicycle(a) => a.measurement(),
        }
    }

    fn sense(&mut self, field: &dyn ScalarField) {
        match self {
            Self::Holonomic(a) => a.sense(field),
            Self::Unicycle(a) => a.sense(field),
        }
    }

    fn move_along(&mut self, ascent: Vec2, dt: f64) {
        match self {
            Self::Holonomic(a) => a.move_along(ascent, dt),
            Self::Unicycle(a) => a.move_along(ascent, dt),
        }
    }
}
