//! Playing one round and auditing a published one.

use crate::prompt::{self, Choice};
use crate::table;
use anyhow::{anyhow, Context};
use fair_rps_core::{CommitmentTag, MoveSet, Round, SecretKey};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Printed when the move list is rejected
pub const USAGE: &str = "\
Error: Incorrect number of moves or non-unique moves provided.
Usage: fair-rps <move1> <move2> <move3> ...
Example: fair-rps rock paper scissors";

fn print_menu<W: Write>(moves: &MoveSet, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, name) in moves.names().iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, name)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")
}

/// Play one round: commit, prompt, resolve, reveal
pub fn play<R: BufRead, W: Write>(
    moves: MoveSet,
    json: bool,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let round = Round::start(moves).context("cannot start a fair round")?;
    let announcement = round.announcement();

    writeln!(out, "HMAC: {}", announcement.hmac)?;
    if json {
        writeln!(out, "{}", serde_json::to_string(&announcement)?)?;
    }
    print_menu(round.moves(), out)?;

    loop {
        let choice = prompt::read_choice(input, out, round.moves().len())?;
        debug!(?choice, "Prompt answered");

        match choice {
            None | Some(Choice::Exit) => {
                info!(round_id = %round.id(), "Round abandoned");
                writeln!(out, "Exiting game.")?;
                return Ok(());
            }
            Some(Choice::Help) => {
                writeln!(out, "{}", table::help(round.moves()))?;
            }
            Some(Choice::Invalid(text)) => {
                writeln!(
                    out,
                    "Invalid input \"{}\". Enter a number from 0 to {}, or ? for help.",
                    text,
                    round.moves().len()
                )?;
            }
            Some(Choice::Move(index)) => {
                let human = round
                    .moves()
                    .at(index)
                    .ok_or_else(|| anyhow!("move #{} is out of range", index + 1))?;
                let finished = round.play(human)?;

                writeln!(out, "Your move: {}", finished.human_move())?;
                writeln!(out, "Computer move: {}", finished.computer_move())?;
                writeln!(out, "Result: {}", finished.outcome())?;
                writeln!(out, "HMAC key: {}", finished.key())?;

                let reveal = finished.reveal();
                if json {
                    writeln!(out, "{}", serde_json::to_string(&reveal)?)?;
                }
                return Ok(());
            }
        }
    }
}

/// Recheck a published HMAC. `Ok(false)` is an integrity violation.
pub fn verify_published<W: Write>(
    key: &str,
    move_name: &str,
    hmac: &str,
    out: &mut W,
) -> anyhow::Result<bool> {
    let key: SecretKey = key.parse().context("reading --key")?;
    let tag: CommitmentTag = hmac.parse().context("reading --hmac")?;

    match tag.verify_or_violation(&key, move_name) {
        Ok(()) => {
            writeln!(out, "OK: HMAC matches move \"{}\"", move_name)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{}", e)?;
            Ok(false)
        }
    }
}
