//! Stigmergy wire format helpers.

use crate::envelope::Envelope;
use serde::{Deserialize, Serialize};
use vstig_core::{serialization, Entry, Result, StigmergyId, VstigError};

/// Wire version spoken by this build.
pub const PROTOCOL_VERSION: u16 = 1;

/// Discriminates the two packet kinds an envelope can frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacketKind {
    /// A write for receivers to merge through conflict resolution.
    Update,
    /// A read announcement. Observed, never merged.
    Query,
}

/// Body shared by update and query packets.
///
/// A query mirrors the entry it read so that neighbours see the same
/// (value, timestamp, owner) triple the reader saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StigmergyMessage {
    /// Tuple structure the entry belongs to.
    pub stigmergy: StigmergyId,
    /// Key within the structure.
    pub key: String,
    /// The entry: value bytes plus the (timestamp, owner) version.
    pub entry: Entry,
}

impl StigmergyMessage {
    /// Create a message body.
    pub fn new(stigmergy: StigmergyId, key: impl Into<String>, entry: Entry) -> Self {
        Self {
            stigmergy,
            key: key.into(),
            entry,
        }
    }
}

/// Serialize an envelope for transmission.
pub fn serialize_envelope(envelope: &Envelope) -> Result<Vec<u8>> {
    serialization::to_vec(envelope)
}

/// Deserialize an envelope received off the wire.
pub fn deserialize_envelope(bytes: &[u8]) -> Result<Envelope> {
    serialization::from_slice(bytes).map_err(|err| VstigError::malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vstig_core::{RobotId, Timestamp};

    fn sample_entry() -> Entry {
        Entry::new(b"food-site-a".to_vec(), Timestamp(42), RobotId(3))
    }

    #[test]
    fn envelope_round_trips_on_the_wire() {
        let message = StigmergyMessage::new(StigmergyId(1), "target", sample_entry());
        let envelope = Envelope::update(RobotId(3), &message).unwrap();

        let bytes = serialize_envelope(&envelope).unwrap();
        let back = deserialize_envelope(&bytes).unwrap();

        assert_eq!(back.source, RobotId(3));
        assert_eq!(back.kind, PacketKind::Update);
        assert_eq!(back.payload, envelope.payload);
    }

    #[test]
    fn truncated_wire_bytes_are_malformed() {
        let message = StigmergyMessage::new(StigmergyId(1), "target", sample_entry());
        let envelope = Envelope::query(RobotId(3), &message).unwrap();

        let bytes = serialize_envelope(&envelope).unwrap();
        let result = deserialize_envelope(&bytes[..bytes.len() / 2]);

        assert!(matches!(result, Err(VstigError::MalformedPacket(_))));
    }
}
