//! State shared by every motion law: identity, position, last reading.

use plume_core::{AgentId, ConfigError, ScalarField, Vec2};

/// Identity, position and last measurement of one agent.
///
/// Both motion laws embed this and delegate the sensing half of the
/// [`Agent`](plume_core::Agent) contract to it.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    id: AgentId,
    pub(crate) position: Vec2,
    measurement: f64,
}

impl AgentState {
    /// Create state at `position` with a zero measurement.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPosition`] if either component of
    /// `position` is NaN or infinite.
    pub fn new(id: AgentId, position: Vec2) -> Result<Self, ConfigError> {
        if !position.is_finite() {
            return Err(ConfigError::InvalidPosition { agent: id });
        }
        Ok(Self {
            id,
            position,
            measurement: 0.0,
        })
    }

    /// Agent identifier.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Last recorded measurement.
    pub fn measurement(&self) -> f64 {
        self.measurement
    }

    /// Record `field`'s intensity at the current position.
    pub fn sense(&mut self, field: &dyn ScalarField) {
        self.measurement = field.intensity(self.position);
    }
}
