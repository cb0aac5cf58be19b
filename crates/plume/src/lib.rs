//! Plume: swarm source-seeking in a scalar field.
//!
//! A swarm of agents samples a scalar field at its own positions, a
//! swarm-level estimator turns the samples into one shared ascent
//! vector, and every agent moves along it. This is the top-level facade
//! crate that re-exports the public API from all Plume sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use plume::prelude::*;
//!
//! let mut config = SimulationConfig::seeded(42, 3, 101);
//! config.deployment.motion_law = MotionLaw::Holonomic;
//!
//! let mut swarm = LockstepSwarm::new(config).unwrap();
//! let start = swarm.centroid().distance(swarm.field().source());
//! for result in swarm.run(20.0).unwrap() {
//!     assert!(result.ascent.is_finite());
//! }
//! let end = swarm.centroid().distance(swarm.field().source());
//! assert!(end < start);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plume-core` | `Vec2`, IDs, `Agent` and `ScalarField` traits, errors |
//! | [`field`] | `plume-field` | Seeded Gaussian field |
//! | [`agents`] | `plume-agents` | Holonomic and unicycle motion laws |
//! | [`estimator`] | `plume-estimator` | Swarm ascent estimator and degeneracy index |
//! | [`engine`] | `plume-engine` | Configuration, deployment, lockstep driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`plume-core`).
pub use plume_core as types;

/// Scalar fields (`plume-field`).
///
/// [`field::GaussianField`] is the only field shipped; any
/// [`types::ScalarField`] works with the estimator and agents.
pub use plume_field as field;

/// Agent motion laws (`plume-agents`).
pub use plume_agents as agents;

/// Swarm gradient estimation (`plume-estimator`).
pub use plume_estimator as estimator;

/// Configuration, seeded deployment, and the lockstep driver (`plume-engine`).
pub use plume_engine as engine;

/// Common imports for typical Plume usage.
///
/// ```rust
/// use plume::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use plume_core::{Agent, AgentId, ScalarField, TickId, Vec2};

    // Errors
    pub use plume_core::{ConfigError, EstimateError, StepError};

    // Field
    pub use plume_field::{FieldConfig, GaussianField};

    // Agents
    pub use plume_agents::{
        HolonomicAgent, MotionLaw, SwarmAgent, UnicycleAgent, ZeroAscentPolicy,
    };

    // Estimator
    pub use plume_estimator::{SwarmEstimator, SwarmTelemetry};

    // Engine
    pub use plume_engine::{
        DeploymentConfig, HeadingInit, LockstepSwarm, SimulationConfig, StepMetrics, StepResult,
    };
}
