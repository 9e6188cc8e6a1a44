//! # vstig-core - foundational types for virtual stigmergy
//!
//! Pure data types and decision logic shared by every layer of the
//! stigmergy stack: identifiers, wall-clock timestamps, versioned entries,
//! the conflict-resolution rule, the payload codec boundary, and the
//! unified error type. No I/O, no locking, no async; everything in this
//! crate is deterministic and directly testable.
//!
//! ## Conflict resolution
//!
//! Writes are ordered last-writer-wins by wall-clock seconds, with a
//! deterministic tie-break (numerically lower robot id) for writes that
//! land in the same second. The rule is commutative and idempotent, so
//! every replica converges on the same entry for a key no matter how the
//! updates were reordered, duplicated, or dropped in transit. See
//! [`resolve::candidate_wins`].

#![forbid(unsafe_code)]

/// Robot and stigmergy identifiers
pub mod identifiers;

/// Wall-clock timestamps and the pluggable clock source
pub mod time;

/// Versioned store entries
pub mod entry;

/// Pure conflict resolution
pub mod resolve;

/// Canonical binary serialization helpers
pub mod serialization;

/// Payload codec boundary and the bincode default
pub mod codec;

/// Unified error handling
pub mod errors;

pub use codec::{BincodeCodec, PayloadCodec};
pub use entry::Entry;
pub use errors::{Result, VstigError};
pub use identifiers::{RobotId, StigmergyId};
pub use resolve::candidate_wins;
pub use time::{Clock, ManualClock, SystemClock, Timestamp};
