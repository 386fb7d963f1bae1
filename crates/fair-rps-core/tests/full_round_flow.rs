//! Integration tests for the full round flow.
//!
//! These tests walk a round from commitment to audit the way a player and
//! an independent auditor would see it.

use fair_rps_core::{
    audit,
    crypto::{commit, verify, CommitmentTag, SecretKey},
    CommitAnnouncement, GameError, MoveSet, MoveSetViolation, Outcome, RevealMessage, Round,
};

fn fixed_key() -> SecretKey {
    SecretKey::from_bytes([0x42; 32])
}

/// Three moves, computer commits to scissors, human picks rock
#[test]
fn test_three_move_round_with_fixed_key() {
    let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
    let scissors = moves.get("scissors").unwrap();
    let tag = commit(&fixed_key(), "scissors");

    // Phase 1: commit and publish only the tag
    let round = Round::with_computer_move(moves, scissors, fixed_key()).unwrap();
    let announcement = round.announcement();
    assert_eq!(announcement.hmac, tag);

    // Phase 2: human chooses having seen only the tag
    let rock = round.moves().get("rock").unwrap();

    // Phase 3: resolve; idx(rock)=0, idx(scissors)=2, (2+1)%3 == 0 so scissors wins
    let finished = round.play(rock).unwrap();
    assert_eq!(finished.outcome(), Outcome::Lose);

    // Phase 4: reveal key and verify independently
    let reveal = finished.reveal();
    assert!(verify(&reveal.key, &reveal.computer_move, &announcement.hmac));
    assert_eq!(audit(&announcement, &reveal).unwrap(), Outcome::Lose);
}

/// rock beats paper under the index rule, not scissors
#[test]
fn test_three_move_oracle_table() {
    let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
    assert_eq!(moves.resolve_names("rock", "paper").unwrap(), Outcome::Win);
    assert_eq!(moves.resolve_names("rock", "scissors").unwrap(), Outcome::Lose);
    assert_eq!(moves.resolve_names("scissors", "rock").unwrap(), Outcome::Win);
}

/// Five moves: all 25 outcomes follow the half-offset rule, plus spot checks
#[test]
fn test_five_move_round_outcomes() {
    let moves = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
    let names = moves.names().to_vec();
    let mut off_diagonal_draws = 0;

    for (i, row) in names.iter().enumerate() {
        for (j, column) in names.iter().enumerate() {
            let outcome = moves.resolve_names(row, column).unwrap();
            let reverse = moves.resolve_names(column, row).unwrap();
            assert_eq!(outcome.reversed(), reverse);
            assert_eq!(outcome == Outcome::Win, (i + 2) % 5 == j);
            assert_eq!(outcome == Outcome::Lose, (j + 2) % 5 == i);
            if i != j && outcome == Outcome::Draw {
                off_diagonal_draws += 1;
            }
        }
    }
    // only pairs exactly half apart are decided
    assert_eq!(off_diagonal_draws, 10);

    // half = 2
    assert_eq!(moves.resolve_names("rock", "scissors").unwrap(), Outcome::Win);
    assert_eq!(moves.resolve_names("lizard", "rock").unwrap(), Outcome::Win);
    assert_eq!(moves.resolve_names("paper", "spock").unwrap(), Outcome::Lose);
    assert_eq!(moves.resolve_names("rock", "paper").unwrap(), Outcome::Draw);
}

#[test]
fn test_full_random_round_audits_cleanly() {
    let moves = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
    let round = Round::start(moves).unwrap();
    let announcement = round.announcement();

    // Round trips through JSON, as an auditor would receive it
    let announcement_json = serde_json::to_string(&announcement).unwrap();

    let human = round.moves().get("spock").unwrap();
    let finished = round.play(human).unwrap();
    let expected = finished.outcome();
    let reveal_json = serde_json::to_string(&finished.reveal()).unwrap();

    let announcement: CommitAnnouncement = serde_json::from_str(&announcement_json).unwrap();
    let reveal: RevealMessage = serde_json::from_str(&reveal_json).unwrap();
    assert_eq!(audit(&announcement, &reveal).unwrap(), expected);
}

#[test]
fn test_tampering_detected() {
    let key = fixed_key();
    let tag = commit(&key, "scissors");

    assert!(!verify(&key, "rock", &tag));
    let err = tag.verify_or_violation(&key, "rock").unwrap_err();
    assert!(matches!(err, GameError::IntegrityViolation(_)));
}

#[test]
fn test_tampered_published_tag_fails_audit() {
    let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
    let rock = moves.get("rock").unwrap();
    let round = Round::with_computer_move(moves, rock, fixed_key()).unwrap();
    let mut announcement = round.announcement();
    let paper = round.moves().get("paper").unwrap();
    let reveal = round.play(paper).unwrap().reveal();

    let mut bytes = *announcement.hmac.as_bytes();
    bytes[0] ^= 0x80;
    announcement.hmac = CommitmentTag::from_bytes(bytes);

    assert!(audit(&announcement, &reveal).unwrap_err().is_integrity_violation());
}

#[test]
fn test_rejected_move_sets() {
    assert!(matches!(
        MoveSet::new(["rock", "paper"]),
        Err(GameError::InvalidMoveSet(MoveSetViolation::TooFew(2)))
    ));
    assert!(matches!(
        MoveSet::new(["rock", "rock", "paper"]),
        Err(GameError::InvalidMoveSet(MoveSetViolation::Duplicate(_)))
    ));
}

#[test]
fn test_fresh_key_per_round() {
    let first = Round::start(MoveSet::new(["a", "b", "c"]).unwrap()).unwrap();
    let second = Round::start(MoveSet::new(["a", "b", "c"]).unwrap()).unwrap();
    let a = first.moves().at(0).unwrap();
    let b = second.moves().at(0).unwrap();

    let k1 = first.play(a).unwrap().reveal().key;
    let k2 = second.play(b).unwrap().reveal().key;
    assert_ne!(k1.as_bytes(), k2.as_bytes());
}
