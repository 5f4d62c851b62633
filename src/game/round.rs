//! Per-round state
//!
//! A round holds everything that changes while one game is played. Rounds are
//! replaced wholesale: a reset builds a fresh one and each guess produces the next
//! one, so the pattern and the candidate set never disagree.

use super::family::{FamilyCounts, Selection, family_counts, partition, select_family};
use crate::core::{Difficulty, HangmanError, PLACEHOLDER, RevealPattern};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Settings fixed for the duration of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub word_length: usize,
    pub guesses_allowed: u32,
    pub difficulty: Difficulty,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(word_length: usize, guesses_allowed: u32, difficulty: Difficulty) -> Self {
        Self {
            word_length,
            guesses_allowed,
            difficulty,
        }
    }
}

/// Mutable state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    config: RoundConfig,
    guesses_remaining: u32,
    guessed: BTreeSet<char>,
    pattern: RevealPattern,
    candidates: Vec<Arc<str>>,
}

/// What a single guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Every family the guess produced, pattern to size
    pub families: FamilyCounts,
    /// How the surviving family was chosen
    pub selection: Selection,
    /// Whether the surviving pattern reveals the guessed letter
    pub hit: bool,
}

impl RoundState {
    /// Start a round over the given candidates
    pub(crate) fn start(config: RoundConfig, candidates: Vec<Arc<str>>) -> Self {
        Self {
            config,
            guesses_remaining: config.guesses_allowed,
            guessed: BTreeSet::new(),
            pattern: RevealPattern::blank(config.word_length),
            candidates,
        }
    }

    #[must_use]
    pub const fn config(&self) -> RoundConfig {
        self.config
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    #[must_use]
    pub const fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub const fn pattern(&self) -> &RevealPattern {
        &self.pattern
    }

    #[must_use]
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    /// Compute the round that follows guessing `letter`
    ///
    /// `self` is left untouched; the caller swaps the returned round in.
    ///
    /// # Errors
    /// `InvalidGuess` for the placeholder, `AlreadyGuessed` if `letter` was
    /// guessed before, `NoCandidates` if the candidate set is empty.
    pub(crate) fn after_guess(&self, letter: char) -> Result<(Self, GuessOutcome), HangmanError> {
        if letter == PLACEHOLDER {
            return Err(HangmanError::InvalidGuess(letter));
        }
        if self.guessed.contains(&letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let mut guessed = self.guessed.clone();
        guessed.insert(letter);
        let guess_number = guessed.len();

        let families = partition(&self.candidates, &self.pattern, letter);
        let counts = family_counts(&families);
        let selection = select_family(&families, guess_number, self.config.difficulty)
            .ok_or(HangmanError::NoCandidates)?;

        if selection.relented {
            log::debug!(
                "guess #{guess_number} ({}): relenting to runner-up '{}' over '{}'",
                self.config.difficulty,
                families[selection.runner_up].pattern,
                families[selection.hardest].pattern
            );
        }

        let Some(chosen) = families.into_iter().nth(selection.index) else {
            return Err(HangmanError::NoCandidates);
        };

        // Compare against the new pattern: the old one never contains a fresh letter.
        let hit = chosen.pattern.contains(letter);
        let guesses_remaining = if hit {
            self.guesses_remaining
        } else {
            self.guesses_remaining.saturating_sub(1)
        };

        let next = Self {
            config: self.config,
            guesses_remaining,
            guessed,
            pattern: chosen.pattern,
            candidates: chosen.words,
        };

        Ok((
            next,
            GuessOutcome {
                families: counts,
                selection,
                hit,
            },
        ))
    }
}
