//! Core types and traits for the Plume source-seeking simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Plume workspace:
//! planar vectors, agent and tick IDs, error types, and the
//! [`ScalarField`] / [`Agent`] traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;
pub mod vec2;

pub use error::{ConfigError, EstimateError, StepError};
pub use id::{AgentId, TickId};
pub use traits::{Agent, ScalarField};
pub use vec2::Vec2;
