//! Error types for the Plume simulation.
//!
//! Organized by phase: construction ([`ConfigError`]), estimation
//! ([`EstimateError`]) and the lockstep driver ([`StepError`]).
//! Numerical edge cases (vanishing ascent vector, coincident agents)
//! are handled by policy inside the models and never surface here.

use std::error::Error;
use std::fmt;

use crate::id::{AgentId, TickId};

/// Errors detected while validating configuration or constructing
/// fields, agents and swarms.
///
/// Every constructor validates eagerly, so these surface before the
/// first tick runs.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Timestep is NaN, infinite, zero, or negative.
    InvalidTimestep {
        /// The invalid value.
        value: f64,
    },
    /// Forward speed is NaN, infinite, zero, or negative.
    InvalidSpeed {
        /// The invalid value.
        value: f64,
    },
    /// Angular control gain is NaN, infinite, zero, or negative.
    InvalidGain {
        /// The invalid value.
        value: f64,
    },
    /// Field spread is NaN, infinite, zero, or negative.
    InvalidSpread {
        /// The invalid value.
        value: f64,
    },
    /// Field peak amplitude is NaN, infinite, or negative.
    InvalidAmplitude {
        /// The invalid value.
        value: f64,
    },
    /// A placement bound is NaN, infinite, zero, or negative.
    InvalidBound {
        /// The invalid value.
        value: f64,
    },
    /// Spread of the intra-swarm geometry is NaN, infinite, or negative.
    InvalidGeometrySpread {
        /// The invalid value.
        value: f64,
    },
    /// Initial heading is NaN or infinite.
    InvalidHeading {
        /// The invalid value.
        value: f64,
    },
    /// Degeneracy threshold is NaN, infinite, or negative.
    InvalidThreshold {
        /// The invalid value.
        value: f64,
    },
    /// An explicitly placed field source has a non-finite component.
    InvalidSource,
    /// An initial position has a non-finite component.
    InvalidPosition {
        /// The agent whose position was rejected.
        agent: AgentId,
    },
    /// A swarm must contain at least one agent.
    EmptySwarm,
    /// More agents requested than [`AgentId`] can number.
    SwarmTooLarge {
        /// The requested swarm size.
        size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidSpeed { value } => {
                write!(f, "forward speed must be finite and positive, got {value}")
            }
            Self::InvalidGain { value } => {
                write!(f, "angular gain must be finite and positive, got {value}")
            }
            Self::InvalidSpread { value } => {
                write!(f, "field spread must be finite and positive, got {value}")
            }
            Self::InvalidAmplitude { value } => {
                write!(f, "field amplitude must be finite and >= 0, got {value}")
            }
            Self::InvalidBound { value } => {
                write!(f, "placement bound must be finite and positive, got {value}")
            }
            Self::InvalidGeometrySpread { value } => {
                write!(f, "geometry spread must be finite and >= 0, got {value}")
            }
            Self::InvalidHeading { value } => {
                write!(f, "initial heading must be finite, got {value}")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "degeneracy threshold must be finite and >= 0, got {value}")
            }
            Self::InvalidSource => write!(f, "field source must be finite"),
            Self::InvalidPosition { agent } => {
                write!(f, "agent {agent} has a non-finite initial position")
            }
            Self::EmptySwarm => write!(f, "swarm must contain at least one agent"),
            Self::SwarmTooLarge { size } => {
                write!(f, "swarm size {size} exceeds the agent id range")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from the swarm gradient estimator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimateError {
    /// The estimator was invoked over an empty agent set. The centroid is
    /// undefined, and a zero vector would be indistinguishable from a
    /// flat field.
    EmptySwarm,
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySwarm => write!(f, "cannot estimate ascent direction of an empty swarm"),
        }
    }
}

impl Error for EstimateError {}

/// Errors from the lockstep driver during `step_sync()`.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The estimator rejected the sensing snapshot.
    Estimate(EstimateError),
    /// An agent left the finite plane after moving. The tick was rolled
    /// back and the swarm is left at its pre-move positions.
    NonFinitePosition {
        /// The first offending agent.
        agent: AgentId,
        /// The tick that was rolled back.
        tick: TickId,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Estimate(e) => write!(f, "estimate: {e}"),
            Self::NonFinitePosition { agent, tick } => {
                write!(f, "agent {agent} reached a non-finite position at tick {tick}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Estimate(e) => Some(e),
            Self::NonFinitePosition { .. } => None,
        }
    }
}

impl From<EstimateError> for StepError {
    fn from(e: EstimateError) -> Self {
        Self::Estimate(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_name_the_value() {
        let e = ConfigError::InvalidTimestep { value: -0.1 };
        assert_eq!(e.to_string(), "dt must be finite and positive, got -0.1");
        let e = ConfigError::InvalidPosition { agent: AgentId(3) };
        assert!(e.to_string().contains("agent 3"));
        let e = ConfigError::SwarmTooLarge { size: usize::MAX };
        assert!(e.to_string().contains(&usize::MAX.to_string()));
    }

    #[test]
    fn step_error_chains_estimate_source() {
        let e: StepError = EstimateError::EmptySwarm.into();
        assert_eq!(e, StepError::Estimate(EstimateError::EmptySwarm));
        let source = e.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("cannot estimate ascent direction of an empty swarm")
        );
    }

    #[test]
    fn non_finite_position_has_no_source() {
        let e = StepError::NonFinitePosition {
            agent: AgentId(1),
            tick: TickId(9),
        };
        assert!(e.source().is_none());
        assert!(e.to_string().contains("tick 9"));
    }
}
