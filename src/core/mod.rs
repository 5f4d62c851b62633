//! Core domain types for evil Hangman
//!
//! Reveal patterns, difficulty levels and the engine's error type. Everything here
//! is pure and independent of the engine's round bookkeeping.

mod difficulty;
mod error;
mod pattern;

pub use difficulty::Difficulty;
pub use error::HangmanError;
pub use pattern::{PLACEHOLDER, RevealPattern};
