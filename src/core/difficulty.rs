//! Difficulty levels
//!
//! Difficulty controls how often the engine relents and keeps the runner-up
//! family instead of the hardest one.

use super::HangmanError;
use std::fmt;
use std::str::FromStr;

/// How aggressively the engine narrows the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Relent on every second guess
    Relaxed,
    /// Relent on every fourth guess
    Moderate,
    /// Never relent
    #[default]
    Strict,
}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub const ALL: [Self; 3] = [Self::Relaxed, Self::Moderate, Self::Strict];

    /// Check if the engine relents on the given guess
    ///
    /// `guess_number` counts guesses made this round, including the current one.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Difficulty;
    ///
    /// assert!(Difficulty::Relaxed.relents_on(2));
    /// assert!(!Difficulty::Moderate.relents_on(2));
    /// assert!(Difficulty::Moderate.relents_on(4));
    /// assert!(!Difficulty::Strict.relents_on(4));
    /// ```
    #[must_use]
    pub const fn relents_on(self, guess_number: usize) -> bool {
        match self {
            Self::Relaxed => guess_number % 2 == 0,
            Self::Moderate => guess_number % 4 == 0,
            Self::Strict => false,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Moderate => "moderate",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = HangmanError;

    /// Accepts the canonical names plus `easy`/`medium`/`hard` and `1`/`2`/`3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" | "easy" | "1" => Ok(Self::Relaxed),
            "moderate" | "medium" | "2" => Ok(Self::Moderate),
            "strict" | "hard" | "3" => Ok(Self::Strict),
            _ => Err(HangmanError::UnknownDifficulty(s.to_string())),
        }
    }
}
