//! Evil Hangman game engine
//!
//! The engine keeps the set of words consistent with all guesses so far. Each
//! guess partitions that set into families by the pattern it would reveal, and
//! the family that leaves the player worst off survives.

mod engine;
pub mod family;
mod round;

pub use engine::HangmanEngine;
pub use family::{Family, FamilyCounts, Selection, partition, select_family};
pub use round::{GuessOutcome, RoundConfig, RoundState};
