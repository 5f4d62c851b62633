//! Evil Hangman
//!
//! An adversarial Hangman engine. The engine never commits to a secret word;
//! after every guess it keeps the family of words that leaves the player worst
//! off, relenting now and then depending on the difficulty.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::Difficulty;
//! use evil_hangman::dictionary::Dictionary;
//! use evil_hangman::game::HangmanEngine;
//!
//! let mut engine = HangmanEngine::new(Dictionary::embedded().unwrap());
//! engine.reset_round(4, 8, Difficulty::Strict).unwrap();
//!
//! let families = engine.apply_guess('e').unwrap();
//! println!("{} families, kept {}", families.len(), engine.current_pattern());
//! ```

// Core domain types
pub mod core;

// Word sources
pub mod dictionary;

// Adversarial engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
