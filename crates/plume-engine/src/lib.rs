//! Simulation engine for Plume source-seeking swarms.
//!
//! Provides seeded deployment of a swarm around a random centroid and
//! [`LockstepSwarm`], the synchronous driver that runs the
//! sense → estimate → move cycle one tick at a time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod deploy;
pub mod lockstep;
pub mod metrics;

pub use config::{
    DeploymentConfig, HeadingInit, SimulationConfig, DEFAULT_CENTROID_BOUND,
    DEFAULT_GEOMETRY_SPREAD, DEFAULT_SWARM_SIZE, DEFAULT_TIMESTEP,
};
pub use deploy::{deploy_swarm, initial_centroid};
pub use lockstep::{LockstepSwarm, StepResult};
pub use metrics::StepMetrics;
