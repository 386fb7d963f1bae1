//! Per-round secret key for the HMAC commitment.

use super::hex_serde;
use crate::error::GameError;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret key for one round.
///
/// Not `Clone`: a key belongs to exactly one round and leaves it only
/// when the round is resolved and the key is revealed. The bytes are
/// wiped on drop.
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SecretKey(#[serde(with = "hex_serde")] [u8; KEY_LEN]);

impl SecretKey {
    /// Generate a fresh key from the operating system's secure RNG.
    ///
    /// There is no fallback generator: if the OS source cannot be read the
    /// round cannot be played fairly and `EntropyUnavailable` is returned.
    pub fn generate() -> Result<Self, GameError> {
        let mut key = Self([0u8; KEY_LEN]);
        OsRng
            .try_fill_bytes(&mut key.0)
            .map_err(|e| GameError::EntropyUnavailable(e.to_string()))?;
        Ok(key)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex form, as shown to the player at reveal
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Bytes fed to HMAC as its key: the ASCII hex text of the key.
    ///
    /// Using the printable form lets anyone paste the revealed key into a
    /// stock HMAC-SHA256 tool and reproduce the published tag.
    /// The copy is wiped when dropped.
    pub(crate) fn hmac_key_material(&self) -> Zeroizing<[u8; KEY_LEN * 2]> {
        let mut text = Zeroizing::new([0u8; KEY_LEN * 2]);
        let encoded = hex::encode_to_slice(&self.0, text.as_mut_slice());
        // The buffer is exactly twice the key length.
        debug_assert!(encoded.is_ok());
        text
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<redacted>)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for SecretKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_serde::decode(s)
            .map(Self)
            .map_err(GameError::InvalidKey)
    }
}
