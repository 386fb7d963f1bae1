//! Reading the player's choice from the terminal.

use std::io::{self, BufRead, Write};

/// What the player typed at the prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Exit,
    Help,
    /// Zero-based index into the move set
    Move(usize),
    Invalid(String),
}

/// Interpret one line of input for a move set of `len` moves.
///
/// Moves are numbered from 1; `0` exits and `?` asks for help.
pub fn parse_choice(line: &str, len: usize) -> Choice {
    let line = line.trim();
    if line == "?" {
        return Choice::Help;
    }
    match line.parse::<usize>() {
        Ok(0) => Choice::Exit,
        Ok(n) if n <= len => Choice::Move(n - 1),
        _ => Choice::Invalid(line.to_string()),
    }
}

/// Print the prompt and block for one line. `None` means end of input.
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    len: usize,
) -> io::Result<Option<Choice>> {
    write!(out, "Enter your move: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(parse_choice(&line, len)))
}
