//! Test utilities and mock types for Plume development.
//!
//! Provides mock implementations of the core traits ([`ScalarField`],
//! [`Agent`]) and formation fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{collinear, equilateral_triangle, ring, right_triangle};

use plume_core::{Agent, AgentId, ScalarField, Vec2};

/// Field with the same intensity everywhere.
#[derive(Clone, Copy, Debug)]
pub struct ConstantField {
    value: f64,
}

impl ConstantField {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl ScalarField for ConstantField {
    fn intensity(&self, _point: Vec2) -> f64 {
        self.value
    }
}

/// Affine field `offset + gradient · point`.
///
/// The swarm estimator is exact in expectation for locally linear
/// fields, which makes this the reference for direction checks.
#[derive(Clone, Copy, Debug)]
pub struct LinearField {
    offset: f64,
    gradient: Vec2,
}

impl LinearField {
    pub fn new(offset: f64, gradient: Vec2) -> Self {
        Self { offset, gradient }
    }

    pub fn gradient(&self) -> Vec2 {
        self.gradient
    }
}

impl ScalarField for LinearField {
    fn intensity(&self, point: Vec2) -> f64 {
        self.offset + self.gradient.dot(point)
    }
}

/// Agent with directly settable position and measurement.
///
/// `move_along` applies a holonomic step and counts calls, so tests can
/// check driver ordering without depending on a real motion law.
#[derive(Clone, Debug)]
pub struct MockAgent {
    id: AgentId,
    position: Vec2,
    measurement: f64,
    pub moves: usize,
}

impl MockAgent {
    pub fn new(id: u32, position: Vec2) -> Self {
        Self {
            id: AgentId(id),
            position,
            measurement: 0.0,
            moves: 0,
        }
    }

    /// Mock with a preset measurement, skipping the sensing phase.
    pub fn with_measurement(id: u32, position: Vec2, measurement: f64) -> Self {
        Self {
            measurement,
            ..Self::new(id, position)
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Agent for MockAgent {
    fn id(&self) -> AgentId {
        self.id
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn measurement(&self) -> f64 {
        self.measurement
    }

    fn sense(&mut self, field: &dyn ScalarField) {
        self.measurement = field.intensity(self.position);
    }

    fn move_along(&mut self, ascent: Vec2, dt: f64) {
        self.position += ascent * dt;
        self.moves += 1;
    }
}

/// Mock agents at `positions`, sensed against `field`.
pub fn sensed_swarm(positions: &[Vec2], field: &dyn ScalarField) -> Vec<MockAgent> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let mut agent = MockAgent::new(i as u32, p);
            agent.sense(field);
            agent
        })
        .collect()
}
