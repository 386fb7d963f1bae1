//! Error types shared by every part of the core.

use thiserror::Error;

/// Errors surfaced by the core to its caller
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetViolation),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Secure entropy unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid HMAC tag: {0}")]
    InvalidTag(String),
}

/// Which move set rule was broken
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetViolation {
    #[error("at least 3 moves are required, got {0}")]
    TooFew(usize),

    #[error("an odd number of moves is required, got {0}")]
    EvenCount(usize),

    #[error("move \"{0}\" appears more than once")]
    Duplicate(String),
}

impl GameError {
    /// True for errors that indicate a broken commitment rather than bad input
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, GameError::IntegrityViolation(_))
    }
}
