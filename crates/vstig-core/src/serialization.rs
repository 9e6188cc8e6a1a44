//! Canonical binary serialization helpers.
//!
//! bincode is the workspace's single wire format for packets and stored
//! payloads; these helpers keep the error mapping in one place so callers
//! never touch the bincode error type directly.

use crate::errors::{Result, VstigError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize any serde-compatible value to bincode bytes.
pub fn to_vec<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| VstigError::encode(e.to_string()))
}

/// Deserialize bincode bytes into any serde-compatible value.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|e| VstigError::decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Reading {
        sensor: String,
        celsius: f64,
    }

    #[test]
    fn round_trips_struct() {
        let reading = Reading {
            sensor: "front-left".to_string(),
            celsius: 20.5,
        };

        let bytes = to_vec(&reading).unwrap();
        let decoded: Reading = from_slice(&bytes).unwrap();

        assert_eq!(decoded, reading);
    }

    #[test]
    fn truncated_input_is_a_decode_error() {
        let bytes = to_vec(&1234u64).unwrap();
        let result: Result<u64> = from_slice(&bytes[..3]);

        assert!(matches!(result, Err(VstigError::Decode(_))));
    }
}
