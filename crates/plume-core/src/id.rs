//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an agent within a deployed swarm.
///
/// Agents are numbered sequentially at deployment. An ID is stable for
/// the lifetime of the swarm and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation completes one
/// sense → estimate → move cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
