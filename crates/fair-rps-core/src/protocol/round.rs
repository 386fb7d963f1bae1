//! One round of play against the automated opponent.
//!
//! The order of operations is fixed by ownership: a [`Round`] exposes only
//! its announcement until [`Round::play`] consumes it, and only the
//! resulting [`RoundOutcome`] can hand out the key.

use super::{CommitAnnouncement, RevealMessage, RoundId};
use crate::crypto::{CommitmentTag, SecretKey};
use crate::error::GameError;
use crate::games::{Move, MoveSet, Outcome};
use rand::Rng;
use tracing::{debug, info, warn};

/// A round whose computer move is committed but not yet revealed
pub struct Round {
    id: RoundId,
    moves: MoveSet,
    key: SecretKey,
    computer: Move,
    tag: CommitmentTag,
}

impl Round {
    /// Start a round with a fresh key and a uniformly random computer move.
    ///
    /// Fails with `EntropyUnavailable` if no secure key can be generated.
    pub fn start(moves: MoveSet) -> Result<Self, GameError> {
        let key = SecretKey::generate()?;
        let index = rand::thread_rng().gen_range(0..moves.len());
        let computer = moves
            .at(index)
            .ok_or_else(|| GameError::UnknownMove(format!("move #{}", index)))?;
        Self::with_computer_move(moves, computer, key)
    }

    /// Start a round with a chosen computer move and key
    pub fn with_computer_move(
        moves: MoveSet,
        computer: Move,
        key: SecretKey,
    ) -> Result<Self, GameError> {
        let tag = CommitmentTag::new(&key, moves.name(computer)?);
        let id = RoundId::new();

        info!(round_id = %id, moves = moves.len(), hmac = %tag, "Round committed");

        Ok(Self {
            id,
            moves,
            key,
            computer,
            tag,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// What may be shown before the human chooses
    pub fn announcement(&self) -> CommitAnnouncement {
        CommitAnnouncement {
            round_id: self.id,
            moves: self.moves.names().to_vec(),
            hmac: self.tag,
        }
    }

    /// Resolve the human move against the committed computer move.
    ///
    /// Consumes the round. A move from another set is `UnknownMove` and the
    /// round (with its key) is discarded.
    pub fn play(self, human: Move) -> Result<RoundOutcome, GameError> {
        let outcome = self.moves.resolve(human, self.computer)?;

        debug!(
            round_id = %self.id,
            human = human.index(),
            computer = self.computer.index(),
            "Round resolved"
        );
        info!(round_id = %self.id, %outcome, "Round finished");

        Ok(RoundOutcome {
            id: self.id,
            moves: self.moves,
            human,
            computer: self.computer,
            outcome,
            key: self.key,
        })
    }
}

/// A finished round, ready to reveal its key
#[derive(Debug)]
pub struct RoundOutcome {
    id: RoundId,
    moves: MoveSet,
    human: Move,
    computer: Move,
    outcome: Outcome,
    key: SecretKey,
}

impl RoundOutcome {
    /// Outcome for the human move against the computer move
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn human_move(&self) -> &str {
        &self.moves.names()[self.human.index()]
    }

    pub fn computer_move(&self) -> &str {
        &self.moves.names()[self.computer.index()]
    }

    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// Publish the moves, result, and key
    pub fn reveal(self) -> RevealMessage {
        RevealMessage {
            round_id: self.id,
            human_move: self.human_move().to_string(),
            computer_move: self.computer_move().to_string(),
            outcome: self.outcome,
            key: self.key,
        }
    }
}

/// Recheck a finished round from its two published messages.
///
/// Returns the recomputed outcome. Any inconsistency between what was
/// announced and what was revealed is an `IntegrityViolation`.
pub fn audit(
    announcement: &CommitAnnouncement,
    reveal: &RevealMessage,
) -> Result<Outcome, GameError> {
    if announcement.round_id != reveal.round_id {
        warn!(
            announced = %announcement.round_id,
            revealed = %reveal.round_id,
            "Audit round id mismatch"
        );
        return Err(GameError::IntegrityViolation(format!(
            "reveal for round {} does not belong to round {}",
            reveal.round_id, announcement.round_id
        )));
    }

    let moves = MoveSet::new(announcement.moves.iter().cloned())?;
    let human = moves.get(&reveal.human_move)?;
    let computer = moves.get(&reveal.computer_move)?;

    if let Err(e) = announcement
        .hmac
        .verify_or_violation(&reveal.key, &reveal.computer_move)
    {
        warn!(round_id = %reveal.round_id, "Audit HMAC mismatch");
        return Err(e);
    }

    let outcome = moves.resolve(human, computer)?;
    if outcome != reveal.outcome {
        warn!(round_id = %reveal.round_id, "Audit outcome mismatch");
        return Err(GameError::IntegrityViolation(format!(
            "revealed outcome {} but {} against {} is {}",
            reveal.outcome, reveal.human_move, reveal.computer_move, outcome
        )));
    }

    debug!(round_id = %reveal.round_id, "Audit passed");
    Ok(outcome)
}
