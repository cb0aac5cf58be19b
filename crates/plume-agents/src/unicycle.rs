//! Non-holonomic (unicycle) motion law.
//!
//! Models a differential-drive unit that moves at constant forward speed
//! `u_r` and can only steer its angular velocity. Each step:
//!
//! ```text
//! target = heading                       if ‖ascent‖ < ε
//!          atan2(ascent.y, ascent.x)     otherwise
//! δ      = atan2(sin(target − heading), cos(target − heading))
//! ω      = k_γ · δ
//! heading  += ω · dt
//! position += u_r · (cos heading, sin heading) · dt
//! ```
//!
//! The velocity uses the heading *after* the update. Integration is
//! first-order, so accuracy needs `dt` small relative to `1/k_γ` and to
//! the field's spatial scale.
//!
//! Constructed via the builder pattern: [`UnicycleAgent::builder`].

use std::f64::consts::PI;

use plume_core::{Agent, AgentId, ConfigError, ScalarField, Vec2};

use crate::state::AgentState;

/// Ascent vectors shorter than this carry no usable direction.
pub const ASCENT_EPSILON: f64 = 1e-6;

/// What a unicycle does when the ascent vector is numerically zero
/// (formation degeneracy, or sitting exactly on the source).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroAscentPolicy {
    /// Keep the current heading and keep driving at `u_r`.
    #[default]
    HoldHeading,
    /// Keep the current heading and stand still for the step.
    Stop,
}

/// Signed shortest angular difference, wrapped into `(−π, π]`.
///
/// Computed as `atan2(sin a, cos a)`, which stays continuous across the
/// ±π seam where a raw subtraction would jump by 2π.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.sin().atan2(angle.cos());
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// A constant-speed agent steered by a proportional heading controller.
#[derive(Clone, Debug, PartialEq)]
pub struct UnicycleAgent {
    state: AgentState,
    heading: f64,
    speed: f64,
    gain: f64,
    zero_ascent: ZeroAscentPolicy,
}

/// Builder for [`UnicycleAgent`].
///
/// Defaults: heading `0`, speed `2.0`, gain `0.5`,
/// [`ZeroAscentPolicy::HoldHeading`].
pub struct UnicycleAgentBuilder {
    id: AgentId,
    position: Vec2,
    heading: f64,
    speed: f64,
    gain: f64,
    zero_ascent: ZeroAscentPolicy,
}

impl UnicycleAgent {
    /// Create a new builder for an agent with the given identity and
    /// initial position.
    pub fn builder(id: AgentId, position: Vec2) -> UnicycleAgentBuilder {
        UnicycleAgentBuilder {
            id,
            position,
            heading: 0.0,
            speed: 2.0,
            gain: 0.5,
            zero_ascent: ZeroAscentPolicy::default(),
        }
    }

    /// Current heading in radians. Stored unbounded; only its sine and
    /// cosine are ever used.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Fixed forward speed `u_r`.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Fixed angular gain `k_γ`.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Behaviour when the ascent vector vanishes.
    pub fn zero_ascent_policy(&self) -> ZeroAscentPolicy {
        self.zero_ascent
    }

    /// Shared agent state.
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Heading error `δ` toward `ascent`, in `(−π, π]`.
    pub fn heading_error(&self, ascent: Vec2) -> f64 {
        match target_heading(ascent) {
            Some(target) => wrap_angle(target - self.heading),
            None => 0.0,
        }
    }
}

fn target_heading(ascent: Vec2) -> Option<f64> {
    if ascent.norm() < ASCENT_EPSILON {
        None
    } else {
        Some(ascent.angle())
    }
}

impl UnicycleAgentBuilder {
    /// Set the initial heading in radians (default: 0).
    pub fn heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    /// Set the forward speed `u_r` (default: 2.0). Must be > 0.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the angular gain `k_γ` (default: 0.5). Must be > 0.
    pub fn gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Set the zero-ascent policy (default: hold heading).
    pub fn zero_ascent(mut self, policy: ZeroAscentPolicy) -> Self {
        self.zero_ascent = policy;
        self
    }

    /// Build the agent, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the position is not finite
    /// - the heading is not finite
    /// - `speed` or `gain` is not finite and strictly positive
    pub fn build(self) -> Result<UnicycleAgent, ConfigError> {
        let state = AgentState::new(self.id, self.position)?;
        if !self.heading.is_finite() {
            return Err(ConfigError::InvalidHeading {
                value: self.heading,
            });
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed { value: self.speed });
        }
        if !self.gain.is_finite() || self.gain <= 0.0 {
            return Err(ConfigError::InvalidGain { value: self.gain });
        }

        Ok(UnicycleAgent {
            state,
            heading: self.heading,
            speed: self.speed,
            gain: self.gain,
            zero_ascent: self.zero_ascent,
        })
    }
}

impl Agent for UnicycleAgent {
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
        let target = target_heading(ascent);
        if target.is_none() && self.zero_ascent == ZeroAscentPolicy::Stop {
            return;
        }

        // Holding course gives δ = atan2(0, 1) = 0 exactly.
        let delta = wrap_angle(target.unwrap_or(self.heading) - self.heading);
        let omega = self.gain * delta;
        self.heading += omega * dt;

        let velocity = Vec2::from_angle(self.heading) * self.speed;
        self.state.position += velocity * dt;
    }
}
