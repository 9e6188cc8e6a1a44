//! Versioned message envelope.
//!
//! Every packet travels inside an [`Envelope`]: minimal framing metadata
//! (source robot, wire version, packet kind) around an opaque serialized
//! body. Receivers check the version before touching the payload, so a
//! robot running an incompatible build rejects the whole envelope instead
//! of misreading its contents.

use crate::wire::{PacketKind, StigmergyMessage, PROTOCOL_VERSION};
use serde::{Deserialize, Serialize};
use vstig_core::{serialization, Result, RobotId, VstigError};

/// Framed stigmergy packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Robot that emitted the packet.
    pub source: RobotId,
    /// Wire version the sender speaks.
    pub version: u16,
    /// What the payload is: a write to merge or a read announcement.
    pub kind: PacketKind,
    /// Serialized [`StigmergyMessage`].
    pub payload: Vec<u8>,
    /// Carried for wire compatibility; always zero, never verified.
    pub checksum: u32,
}

impl Envelope {
    /// Frame a message body under the given kind.
    pub fn wrap(source: RobotId, kind: PacketKind, message: &StigmergyMessage) -> Result<Self> {
        Ok(Self {
            source,
            version: PROTOCOL_VERSION,
            kind,
            payload: serialization::to_vec(message)?,
            checksum: 0,
        })
    }

    /// Frame an update packet announcing a write.
    pub fn update(source: RobotId, message: &StigmergyMessage) -> Result<Self> {
        Self::wrap(source, PacketKind::Update, message)
    }

    /// Frame a query packet announcing a read.
    pub fn query(source: RobotId, message: &StigmergyMessage) -> Result<Self> {
        Self::wrap(source, PacketKind::Query, message)
    }

    /// Validate the envelope and decode its body.
    ///
    /// Checks the wire version first, then parses the payload. Neither
    /// failure mutates anything; the caller just drops the envelope.
    pub fn open(&self) -> Result<StigmergyMessage> {
        if self.version != PROTOCOL_VERSION {
            return Err(VstigError::VersionMismatch {
                got: self.version,
                expected: PROTOCOL_VERSION,
            });
        }
        serialization::from_slice(&self.payload)
            .map_err(|err| VstigError::malformed(err.to_string()))
    }
}
