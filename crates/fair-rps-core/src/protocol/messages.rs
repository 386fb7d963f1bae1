//! Messages published during a round.

use crate::crypto::{CommitmentTag, SecretKey};
use crate::games::Outcome;
use crate::protocol::RoundId;
use serde::{Deserialize, Serialize};

/// Published before the human chooses: the move set and the HMAC only
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAnnouncement {
    pub round_id: RoundId,
    pub moves: Vec<String>,
    pub hmac: CommitmentTag,
}

/// Published after the result, carrying the key needed to check the HMAC
#[derive(Debug, Serialize, Deserialize)]
pub struct RevealMessage {
    pub round_id: RoundId,
    pub human_move: String,
    pub computer_move: String,
    /// Outcome for the human move against the computer move
    pub outcome: Outcome,
    pub key: SecretKey,
}
