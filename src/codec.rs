//! Codec boundary between materialized state and the stored blob.
//!
//! The snapshot stores treat blobs as opaque bytes; this module is the only
//! place that interprets them. Swapping the wire representation means
//! replacing these two functions.

use serde_json::Value;

use crate::storage::{Result, StorageError};

/// Encode materialized state for storage.
pub fn encode_state(state: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(state).map_err(StorageError::Serialization)
}

/// Decode a stored blob back into materialized state.
///
/// A blob that cannot be parsed (corruption, codec mismatch) surfaces as
/// [`StorageError::Deserialization`], never as an absent snapshot.
pub fn decode_state(blob: &[u8]) -> Result<Value> {
    serde_json::from_slice(blob).map_err(StorageError::Deserialization)
}
