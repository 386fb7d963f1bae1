//! HMAC commitment to a move name.

use super::hex_serde;
use super::SecretKey;
use crate::error::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA256(key, move name)
///
/// Equality is evaluated in constant time.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitmentTag(#[serde(with = "hex_serde")] [u8; 32]);

impl CommitmentTag {
    /// Create a commitment to `move_name` under `key`
    pub fn new(key: &SecretKey, move_name: &str) -> Self {
        let material = key.hmac_key_material();
        let mut mac = HmacSha256::new_from_slice(material.as_slice())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and move name produce this commitment
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        *self == Self::new(key, move_name)
    }

    /// Like [`verify`](Self::verify), but a mismatch is an `IntegrityViolation`
    pub fn verify_or_violation(&self, key: &SecretKey, move_name: &str) -> Result<(), GameError> {
        if self.verify(key, move_name) {
            Ok(())
        } else {
            Err(GameError::IntegrityViolation(format!(
                "HMAC {} does not match move \"{}\" under the revealed key",
                self, move_name
            )))
        }
    }
}

impl PartialEq for CommitmentTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for CommitmentTag {}

impl fmt::Debug for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentTag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for CommitmentTag {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_serde::decode(s)
            .map(Self)
            .map_err(GameError::InvalidTag)
    }
}

/// Commit to `move_name` under `key`
pub fn commit(key: &SecretKey, move_name: &str) -> CommitmentTag {
    CommitmentTag::new(key, move_name)
}

/// Check `tag` against `key` and `move_name` without early exit
pub fn verify(key: &SecretKey, move_name: &str, tag: &CommitmentTag) -> bool {
    tag.verify(key, move_name)
}
