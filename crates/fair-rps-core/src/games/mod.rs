//! Move sets and the half-offset outcome rule.

mod moves;
mod outcome;
mod rules;

pub use moves::{Move, MoveSet};
pub use outcome::Outcome;
