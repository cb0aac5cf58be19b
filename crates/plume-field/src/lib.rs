//! Scalar fields for the Plume source-seeking simulation.
//!
//! Provides [`GaussianField`], an isotropic Gaussian bump whose source
//! location is drawn from a seeded ChaCha8 stream, and the
//! [`FieldConfig`] used to build it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod gaussian;

pub use config::{FieldConfig, DEFAULT_AMPLITUDE, DEFAULT_SOURCE_BOUND, DEFAULT_SPREAD};
pub use gaussian::GaussianField;
