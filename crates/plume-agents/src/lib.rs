//! Agent kinematic models for the Plume source-seeking simulation.
//!
//! Two motion laws implement [`plume_core::Agent`]:
//!
//! - [`HolonomicAgent`]: integrates the ascent vector directly.
//! - [`UnicycleAgent`]: constant forward speed, heading steered by a
//!   proportional law toward the ascent direction.
//!
//! [`SwarmAgent`] wraps either so a deployment can hold one swarm type.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod holonomic;
pub mod state;
pub mod swarm_agent;
pub mod unicycle;

pub use holonomic::HolonomicAgent;
pub use state::AgentState;
pub use swarm_agent::{MotionLaw, SwarmAgent};
pub use unicycle::{
    wrap_angle, UnicycleAgent, UnicycleAgentBuilder, ZeroAscentPolicy, ASCENT_EPSILON,
};
