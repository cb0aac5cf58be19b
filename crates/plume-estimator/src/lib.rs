//! Swarm gradient estimation for the Plume source-seeking simulation.
//!
//! [`SwarmEstimator`] turns one sensing snapshot (positions plus
//! measurements) into a shared ascent vector, and certifies the
//! formation with a degeneracy index (see [`degeneracy`]).
//!
//! # Tick order
//!
//! 1. every agent senses the field
//! 2. one estimator borrows the swarm and produces the ascent vector
//! 3. the borrow ends and every agent moves along that vector
//!
//! Because the estimator holds `&[A]`, step 3 cannot start while an
//! estimator over the same agents is alive.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod degeneracy;
pub mod estimator;
pub mod telemetry;

pub use degeneracy::{smallest_singular_value, DEFAULT_DEGENERACY_THRESHOLD};
pub use estimator::{SwarmEstimator, DEFAULT_FORMATION_RADIUS};
pub use telemetry::SwarmTelemetry;
