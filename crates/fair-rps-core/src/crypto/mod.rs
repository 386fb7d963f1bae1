//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - SecretKey, the per-round 256-bit key drawn from the OS CSPRNG
//! - CommitmentTag, an HMAC-SHA256 tag binding a move name to that key

mod commitment;
mod hex_serde;
mod key;

pub use commitment::{commit, verify, CommitmentTag};
pub use key::{SecretKey, KEY_LEN};
