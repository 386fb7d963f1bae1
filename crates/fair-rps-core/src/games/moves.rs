//! Validated move sets and moves bound to them.

use crate::error::{GameError, MoveSetViolation};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Identity of one constructed move set
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MoveSetId(Uuid);

impl MoveSetId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for MoveSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveSetId({})", self.0)
    }
}

/// A move, identified by its index in the move set it came from.
///
/// Only a [`MoveSet`] hands these out, and every `MoveSet` method that
/// takes a `Move` rejects moves drawn from a different set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    set: MoveSetId,
    index: usize,
}

impl Move {
    /// Zero-based position in the owning move set
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Ordered, duplicate-free, odd-sized list of move names (at least 3)
#[derive(Clone, Debug)]
pub struct MoveSet {
    id: MoveSetId,
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Names are compared exactly (case-sensitive).
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < 3 {
            return Err(MoveSetViolation::TooFew(names.len()).into());
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetViolation::EvenCount(names.len()).into());
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetViolation::Duplicate(name.clone()).into());
            }
        }

        Ok(Self {
            id: MoveSetId::new(),
            names,
        })
    }

    /// Number of moves (always odd, at least 3)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All moves in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.names.len()).map(move |index| Move {
            set: self.id,
            index,
        })
    }

    /// Look up a move by exact name
    pub fn get(&self, name: &str) -> Result<Move, GameError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|index| Move {
                set: self.id,
                index,
            })
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    /// Look up a move by zero-based index
    pub fn at(&self, index: usize) -> Option<Move> {
        (index < self.names.len()).then_some(Move {
            set: self.id,
            index,
        })
    }

    /// Name of a move drawn from this set
    pub fn name(&self, mv: Move) -> Result<&str, GameError> {
        let index = self.index_of(mv)?;
        Ok(&self.names[index])
    }

    /// Index of `mv`, or `UnknownMove` if it belongs to another set
    pub(crate) fn index_of(&self, mv: Move) -> Result<usize, GameError> {
        if mv.set != self.id || mv.index >= self.names.len() {
            return Err(GameError::UnknownMove(format!(
                "move #{} does not belong to this move set",
                mv.index
            )));
        }
        Ok(mv.index)
    }
}
