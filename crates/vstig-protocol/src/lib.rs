//! # vstig-protocol - wire format for stigmergy gossip
//!
//! Everything a robot puts on the air: packet bodies, the versioned
//! envelope that frames them, and the serialization helpers that turn
//! envelopes into bytes and back. Transports move opaque envelopes;
//! only the runtime opens them.
//!
//! ## Packet kinds
//!
//! - `Update` carries a write for neighbours to merge
//! - `Query` announces a read; receivers may observe it but must never
//!   let it touch their store
//!
//! Both kinds share one body shape ([`wire::StigmergyMessage`]), so the
//! envelope's kind tag is the only thing that separates a write from a
//! read announcement.

#![forbid(unsafe_code)]

/// Versioned envelope framing
pub mod envelope;

/// Packet bodies and byte-level helpers
pub mod wire;

pub use envelope::Envelope;
pub use wire::{
    deserialize_envelope, serialize_envelope, PacketKind, StigmergyMessage, PROTOCOL_VERSION,
};
