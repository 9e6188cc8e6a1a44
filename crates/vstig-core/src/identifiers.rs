//! Identifier types used across the stigmergy stack.
//!
//! Both identifiers are plain numeric newtypes. An external identity
//! provider assigns robot ids; stigmergy ids are chosen by the application
//! and must agree across the swarm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of one robot in the swarm.
///
/// Doubles as the deterministic tie-break key during conflict resolution:
/// when two writes carry the same timestamp, the one from the numerically
/// lower robot id wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RobotId(pub u32);

impl RobotId {
    /// Raw numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "robot-{}", self.0)
    }
}

impl From<u32> for RobotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier naming one replicated map instance.
///
/// Multiple independent stigmergies coexist in a single runtime; an id
/// lives for the runtime's lifetime once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StigmergyId(pub u32);

impl StigmergyId {
    /// Raw numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StigmergyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vstig-{}", self.0)
    }
}

impl From<u32> for StigmergyId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
