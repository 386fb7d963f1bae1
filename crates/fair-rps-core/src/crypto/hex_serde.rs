//! Hex encoding helpers for fixed 32-byte values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
    hex::encode(bytes).serialize(s)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
    let hex_str = String::deserialize(d)?;
    decode(&hex_str).map_err(serde::de::Error::custom)
}

/// Decode exactly 32 bytes from a hex string, surrounding whitespace allowed
pub fn decode(s: &str) -> Result<[u8; 32], String> {
    let bytes = hex::decode(s.trim()).map_err(|e| e.to_string())?;
    if bytes.len() != 32 {
        return Err(format!("expected 32 bytes, got {}", bytes.len()));
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}
