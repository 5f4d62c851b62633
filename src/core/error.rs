//! Engine error type

use thiserror::Error;

/// Contract violations reported by the engine
///
/// Every fallible operation leaves the engine unchanged when it returns one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangmanError {
    /// The dictionary had no usable words
    #[error("the dictionary is empty, please use a valid dictionary")]
    EmptyDictionary,

    /// A round was requested for a word length the dictionary does not have
    #[error("the dictionary has no words of length {0}")]
    NoWordsOfLength(usize),

    /// A round was requested with fewer than one guess
    #[error("a round needs at least one guess, got {0}")]
    InvalidGuessBudget(u32),

    /// A round operation was called before any round was started
    #[error("no round has been started")]
    RoundNotStarted,

    /// The letter was already guessed this round
    #[error("'{0}' has already been guessed this round")]
    AlreadyGuessed(char),

    /// The guess is the placeholder character, which can never be revealed
    #[error("'{0}' cannot be guessed")]
    InvalidGuess(char),

    /// The candidate set is empty
    #[error("no candidate words remain")]
    NoCandidates,

    /// A difficulty name could not be parsed
    #[error("unknown difficulty '{0}' (expected relaxed, moderate or strict)")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            HangmanError::NoWordsOfLength(9).to_string(),
            "the dictionary has no words of length 9"
        );
        assert_eq!(
            HangmanError::AlreadyGuessed('e').to_string(),
            "'e' has already been guessed this round"
        );
        assert_eq!(
            HangmanError::InvalidGuess('-').to_string(),
            "'-' cannot be guessed"
        );
        assert_eq!(
            HangmanError::InvalidGuessBudget(0).to_string(),
            "a round needs at least one guess, got 0"
        );
    }
}
