//! Payload codec boundary.
//!
//! The stigmergy core never interprets payload bytes: a codec turns the
//! typed application value into the opaque byte sequence that gets stored
//! and shipped, and back. [`BincodeCodec`] is the default; integrators may
//! substitute any codec satisfying the round-trip property
//! `decode(encode(v)) == v` for every value the application will store.

use crate::errors::Result;
use crate::serialization;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encoding capability required of payload types.
///
/// Codecs are stateless; both operations are associated functions so the
/// codec can be carried as a zero-sized type parameter on a stigmergy
/// handle.
pub trait PayloadCodec {
    /// Serialize a typed value to bytes.
    fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>>;

    /// Reconstruct a typed value from bytes produced by `encode`.
    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T>;
}

/// Default codec: the workspace's canonical bincode format.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl PayloadCodec for BincodeCodec {
    fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
        serialization::to_vec(value)
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        serialization::from_slice(bytes)
    }
}
