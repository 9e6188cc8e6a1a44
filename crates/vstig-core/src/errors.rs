//! Error types shared across the stigmergy crates.

use crate::identifiers::StigmergyId;
use thiserror::Error;

/// Errors surfaced by stigmergy operations.
///
/// A remote write losing conflict resolution is not an error: resolution
/// discards stale entries silently and the swarm keeps converging. Only
/// genuinely unanswerable requests and undecodable bytes land here.
#[derive(Debug, Error)]
pub enum VstigError {
    /// A read targeted a key with no entry in the named tuple structure.
    #[error("key `{key}` not found in {stigmergy}")]
    KeyNotFound {
        /// Tuple structure that was asked.
        stigmergy: StigmergyId,
        /// Key that had no entry.
        key: String,
    },

    /// Serializing a value or packet failed.
    #[error("encode failed: {0}")]
    Encode(String),

    /// Deserializing a value or packet failed.
    #[error("decode failed: {0}")]
    Decode(String),

    /// An envelope payload did not parse as the packet its kind promised.
    #[error("malformed packet: {0}")]
    MalformedPacket(String),

    /// An envelope carried a protocol version this build does not speak.
    #[error("protocol version mismatch: got {got}, expected {expected}")]
    VersionMismatch {
        /// Version the envelope carried.
        got: u16,
        /// Version this build speaks.
        expected: u16,
    },
}

impl VstigError {
    /// Create a key-not-found error.
    pub fn key_not_found(stigmergy: StigmergyId, key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            stigmergy,
            key: key.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a malformed-packet error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPacket(message.into())
    }
}

/// Result alias used throughout the stigmergy crates.
pub type Result<T> = std::result::Result<T, VstigError>;
