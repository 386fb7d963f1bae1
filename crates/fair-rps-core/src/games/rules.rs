//! Half-offset outcome rule.
//!
//! With `half = len / 2`, a move beats the move exactly `half` places after
//! it in the set (wrapping around) and loses to the move exactly `half`
//! places before it. Every other pair of distinct moves is a draw, so sets
//! of five or more moves have off-diagonal draws. The order of the set is
//! the only source of truth; names carry no meaning.

use super::{Move, MoveSet, Outcome};
use crate::error::GameError;

/// Outcome for indices in a set of size `len` (odd, at least 3)
fn outcome_by_index(len: usize, row: usize, column: usize) -> Outcome {
    let half = len / 2;

    if (row + half) % len == column {
        Outcome::Win
    } else if (column + half) % len == row {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}

impl MoveSet {
    /// Outcome of `row` played against `column`
    pub fn resolve(&self, row: Move, column: Move) -> Result<Outcome, GameError> {
        let row = self.index_of(row)?;
        let column = self.index_of(column)?;
        Ok(outcome_by_index(self.len(), row, column))
    }

    /// Outcome of the move named `row` played against the one named `column`
    pub fn resolve_names(&self, row: &str, column: &str) -> Result<Outcome, GameError> {
        self.resolve(self.get(row)?, self.get(column)?)
    }

    /// Full matrix: `table[i][j]` is move `i` played against move `j`
    pub fn outcome_table(&self) -> Vec<Vec<Outcome>> {
        let len = self.len();
        (0..len)
            .map(|row| {
                (0..len)
                    .map(|column| outcome_by_index(len, row, column))
                    .collect()
            })
            .collect()
    }
}
