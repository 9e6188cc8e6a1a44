//! Versioned store entries.

use crate::identifiers::RobotId;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// The versioned value stored for one key.
///
/// An entry is the unit the conflict resolver compares: opaque payload
/// bytes plus the write's wall-clock timestamp and owning robot. A store
/// holds only the currently winning entry per key, never a history, and
/// entries are overwritten but never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Codec output for the typed payload.
    pub value: Vec<u8>,
    /// Wall-clock seconds at the time of the write.
    pub timestamp: Timestamp,
    /// Robot that performed the write.
    pub owner: RobotId,
}

impl Entry {
    /// Entry for a write of `value` performed at `timestamp` by `owner`.
    pub fn new(value: Vec<u8>, timestamp: Timestamp, owner: RobotId) -> Self {
        Self {
            value,
            timestamp,
            owner,
        }
    }

    /// Whether this entry wins against `stored` under last-writer-wins
    /// with the lowest-owner tie-break.
    ///
    /// Strict: an entry never supersedes one carrying its own
    /// `(timestamp, owner)` pair, which is what makes duplicate delivery a
    /// no-op.
    pub fn supersedes(&self, stored: &Entry) -> bool {
        self.timestamp > stored.timestamp
            || (self.timestamp == stored.timestamp && self.owner < stored.owner)
    }
}
