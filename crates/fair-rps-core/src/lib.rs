//! Fair RPS Core Library
//!
//! This crate provides the commitment scheme, move sets, outcome rule,
//! and single-round protocol for an odd-arity rock-paper-scissors game
//! played against an automated opponent that commits to its move first.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{CommitmentTag, SecretKey};
pub use error::{GameError, MoveSetViolation};
pub use games::{Move, MoveSet, Outcome};
pub use protocol::{audit, CommitAnnouncement, RevealMessage, Round, RoundId, RoundOutcome};
