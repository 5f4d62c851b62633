//! Main evil Hangman engine interface

use super::family::FamilyCounts;
use super::round::{GuessOutcome, RoundConfig, RoundState};
use crate::core::{Difficulty, HangmanError};
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::Arc;

/// Adversarial Hangman engine
///
/// Owns an immutable dictionary and at most one round. Instead of picking a
/// secret word up front, the engine keeps every word consistent with the guesses
/// so far and narrows that set as harshly as the difficulty allows.
///
/// # Examples
/// ```
/// use evil_hangman::core::Difficulty;
/// use evil_hangman::dictionary::Dictionary;
/// use evil_hangman::game::HangmanEngine;
///
/// let dictionary = Dictionary::new(["cat", "car", "cot", "dog"]).unwrap();
/// let mut engine = HangmanEngine::new(dictionary);
///
/// engine.reset_round(3, 6, Difficulty::Strict).unwrap();
/// engine.apply_guess('c').unwrap();
///
/// assert_eq!(engine.current_pattern(), "c--");
/// assert_eq!(engine.candidate_count(), 3);
/// assert_eq!(engine.guesses_remaining(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct HangmanEngine {
    dictionary: Dictionary,
    round: Option<RoundState>,
}

impl HangmanEngine {
    /// Create an engine over the given dictionary
    ///
    /// No round is active until [`reset_round`](Self::reset_round) is called.
    #[must_use]
    pub const fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            round: None,
        }
    }

    /// The dictionary this engine draws words from
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Number of dictionary words with exactly `length` characters
    #[must_use]
    pub fn count_by_length(&self, length: usize) -> usize {
        self.dictionary.count_by_length(length)
    }

    /// Start a new round, replacing any previous one
    ///
    /// The candidate set becomes every dictionary word of `word_length`, the
    /// pattern becomes all placeholders and the guess history is cleared.
    ///
    /// # Errors
    /// - `NoWordsOfLength` if the dictionary has no word of `word_length`
    /// - `InvalidGuessBudget` if `guesses_allowed` is zero
    ///
    /// On error the previous round, if any, is kept.
    pub fn reset_round(
        &mut self,
        word_length: usize,
        guesses_allowed: u32,
        difficulty: Difficulty,
    ) -> Result<(), HangmanError> {
        if guesses_allowed == 0 {
            return Err(HangmanError::InvalidGuessBudget(guesses_allowed));
        }

        let candidates = self.dictionary.words_of_length(word_length);
        if candidates.is_empty() {
            return Err(HangmanError::NoWordsOfLength(word_length));
        }

        log::info!(
            "new round: {} candidates of length {word_length}, {guesses_allowed} guesses, {difficulty}",
            candidates.len()
        );

        self.round = Some(RoundState::start(
            RoundConfig::new(word_length, guesses_allowed, difficulty),
            candidates,
        ));
        Ok(())
    }

    /// The active round, if one was started
    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Settings of the active round
    #[must_use]
    pub fn round_config(&self) -> Option<RoundConfig> {
        self.round.as_ref().map(RoundState::config)
    }

    /// Number of words still consistent with every guess (0 before any round)
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.candidates().len())
    }

    /// Words still consistent with every guess, in sorted order
    #[must_use]
    pub fn candidates(&self) -> &[Arc<str>] {
        match &self.round {
            Some(round) => round.candidates(),
            None => &[],
        }
    }

    /// Wrong guesses the player has left (0 before any round)
    ///
    /// The engine never declares a loss itself; reaching 0 is for the caller to
    /// act on.
    #[must_use]
    pub fn guesses_remaining(&self) -> u32 {
        self.round.as_ref().map_or(0, RoundState::guesses_remaining)
    }

    /// Number of letters guessed this round
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.guessed().len())
    }

    /// Guessed letters sorted by character code, e.g. `[a, c, e, s, t, z]`
    #[must_use]
    pub fn guessed_letters(&self) -> String {
        let letters: Vec<String> = self
            .round
            .iter()
            .flat_map(|round| round.guessed().iter())
            .map(char::to_string)
            .collect();
        format!("[{}]", letters.join(", "))
    }

    /// Check if `letter` was already guessed this round
    #[must_use]
    pub fn was_guessed(&self, letter: char) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| round.guessed().contains(&letter))
    }

    /// The reveal pattern with `-` for unrevealed positions (empty before any round)
    #[must_use]
    pub fn current_pattern(&self) -> String {
        self.round
            .as_ref()
            .map(|round| round.pattern().to_string())
            .unwrap_or_default()
    }

    /// Check if every position has been revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| round.pattern().is_complete())
    }

    /// Apply a guess and narrow the candidate set
    ///
    /// Returns every family the guess produced, pattern to word count.
    ///
    /// # Errors
    /// - `RoundNotStarted` before any round
    /// - `InvalidGuess` if `letter` is the placeholder `-`
    /// - `AlreadyGuessed` if `letter` was guessed this round
    /// - `NoCandidates` if the candidate set is empty
    ///
    /// On error the round is unchanged.
    pub fn apply_guess(&mut self, letter: char) -> Result<FamilyCounts, HangmanError> {
        self.guess(letter).map(|outcome| outcome.families)
    }

    /// Like [`apply_guess`](Self::apply_guess), but also reports how the
    /// surviving family was chosen and whether the guess hit
    ///
    /// # Errors
    /// Same as [`apply_guess`](Self::apply_guess).
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, HangmanError> {
        let round = self.round.as_ref().ok_or(HangmanError::RoundNotStarted)?;
        let (next, outcome) = round.after_guess(letter)?;

        log::debug!(
            "guess '{letter}': {} families, kept '{}' with {} words{}",
            outcome.families.len(),
            next.pattern(),
            next.candidates().len(),
            if outcome.hit { "" } else { " (miss)" }
        );

        self.round = Some(next);
        Ok(outcome)
    }

    /// Commit to a secret word
    ///
    /// Returns the only candidate left, or one chosen uniformly at random from
    /// `rng` when several remain. The round is not changed.
    ///
    /// # Errors
    /// - `RoundNotStarted` before any round
    /// - `NoCandidates` if the candidate set is empty
    pub fn reveal_secret_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, HangmanError> {
        let round = self.round.as_ref().ok_or(HangmanError::RoundNotStarted)?;
        let word = match round.candidates() {
            [] => return Err(HangmanError::NoCandidates),
            [only] => only,
            many => many.choose(rng).ok_or(HangmanError::NoCandidates)?,
        };
        Ok(&**word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(words: &[&str]) -> HangmanEngine {
        HangmanEngine::new(Dictionary::new(words).unwrap())
    }

    fn animals() -> HangmanEngine {
        engine(&["cat", "car", "cot", "dog"])
    }

    fn candidate_words(engine: &HangmanEngine) -> Vec<String> {
        engine.candidates().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn queries_before_any_round() {
        let engine = animals();
        assert_eq!(engine.candidate_count(), 0);
        assert_eq!(engine.guesses_remaining(), 0);
        assert_eq!(engine.guessed_letters(), "[]");
        assert_eq!(engine.current_pattern(), "");
        assert!(!engine.was_guessed('a'));
        assert!(engine.round_config().is_none());
    }

    #[test]
    fn operations_before_any_round_fail() {
        let mut engine = animals();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(engine.apply_guess('a'), Err(HangmanError::RoundNotStarted));
        assert_eq!(
            engine.reveal_secret_word(&mut rng),
            Err(HangmanError::RoundNotStarted)
        );
    }

    #[test]
    fn count_by_length_uses_dictionary() {
        let engine = engine(&["cat", "dog", "bird"]);
        assert_eq!(engine.count_by_length(3), 2);
        assert_eq!(engine.count_by_length(4), 1);
        assert_eq!(engine.count_by_length(5), 0);
    }

    #[test]
    fn reset_round_initializes_state() {
        let mut engine = engine(&["cat", "car", "bird"]);
        engine.reset_round(3, 6, Difficulty::Moderate).unwrap();

        assert_eq!(engine.candidate_count(), 2);
        assert_eq!(engine.guesses_remaining(), 6);
        assert_eq!(engine.current_pattern(), "---");
        assert_eq!(engine.guessed_letters(), "[]");
        assert_eq!(
            engine.round_config(),
            Some(RoundConfig::new(3, 6, Difficulty::Moderate))
        );
    }

    #[test]
    fn reset_round_rejects_missing_length() {
        let mut engine = animals();
        assert_eq!(
            engine.reset_round(7, 6, Difficulty::Strict),
            Err(HangmanError::NoWordsOfLength(7))
        );
        assert!(engine.round().is_none());
    }

    #[test]
    fn reset_round_rejects_zero_guesses() {
        let mut engine = animals();
        assert_eq!(
            engine.reset_round(3, 0, Difficulty::Strict),
            Err(HangmanError::InvalidGuessBudget(0))
        );
    }

    #[test]
    fn failed_reset_keeps_previous_round() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('c').unwrap();

        assert!(engine.reset_round(9, 6, Difficulty::Strict).is_err());
        assert_eq!(engine.current_pattern(), "c--");
        assert_eq!(engine.guessed_letters(), "[c]");
    }

    #[test]
    fn reset_round_replaces_previous_round() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('c').unwrap();
        engine.apply_guess('z').unwrap();

        engine.reset_round(3, 4, Difficulty::Relaxed).unwrap();
        assert_eq!(engine.candidate_count(), 4);
        assert_eq!(engine.guesses_remaining(), 4);
        assert_eq!(engine.current_pattern(), "---");
        assert_eq!(engine.guessed_letters(), "[]");
        assert!(!engine.was_guessed('c'));
    }

    #[test]
    fn first_guess_keeps_largest_family() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();

        let families = engine.apply_guess('c').unwrap();

        assert_eq!(families.len(), 2);
        assert_eq!(families.get("c--"), Some(&3));
        assert_eq!(families.get("---"), Some(&1));
        assert_eq!(engine.current_pattern(), "c--");
        assert_eq!(candidate_words(&engine), vec!["car", "cat", "cot"]);
        assert_eq!(engine.guesses_remaining(), 6);
    }

    #[test]
    fn second_guess_prefers_larger_unrevealing_family() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('c').unwrap();

        let families = engine.apply_guess('o').unwrap();

        assert_eq!(families.get("c--"), Some(&2));
        assert_eq!(families.get("co-"), Some(&1));
        assert_eq!(engine.current_pattern(), "c--");
        assert_eq!(candidate_words(&engine), vec!["car", "cat"]);
        assert_eq!(engine.guesses_remaining(), 5);
    }

    #[test]
    fn absent_letter_costs_a_guess() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('c').unwrap();
        engine.apply_guess('z').unwrap();

        assert_eq!(engine.current_pattern(), "c--");
        assert_eq!(engine.candidate_count(), 3);
        assert_eq!(engine.guesses_remaining(), 5);
    }

    #[test]
    fn wrong_guess_on_reduced_set_decrements_once() {
        let mut engine = engine(&["cat", "car"]);
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('c').unwrap();
        assert_eq!(engine.guesses_remaining(), 6);

        let families = engine.apply_guess('z').unwrap();
        assert_eq!(families.len(), 1);
        assert_eq!(families.get("c--"), Some(&2));
        assert_eq!(engine.current_pattern(), "c--");
        assert_eq!(engine.guesses_remaining(), 5);
    }

    #[test]
    fn repeated_guess_is_rejected_without_changes() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('z').unwrap();

        assert_eq!(engine.apply_guess('z'), Err(HangmanError::AlreadyGuessed('z')));
        assert_eq!(engine.guesses_remaining(), 5);
        assert_eq!(engine.guessed_letters(), "[z]");
        assert_eq!(engine.guesses_made(), 1);
    }

    #[test]
    fn placeholder_guess_is_rejected_without_changes() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();

        assert_eq!(engine.apply_guess('-'), Err(HangmanError::InvalidGuess('-')));
        assert_eq!(engine.guesses_remaining(), 6);
        assert_eq!(engine.guessed_letters(), "[]");
        assert_eq!(engine.current_pattern(), "---");
        assert_eq!(engine.candidate_count(), 4);
    }

    #[test]
    fn guesses_match_case_exactly() {
        let mut engine = engine(&["Cat", "Car"]);
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();

        engine.apply_guess('C').unwrap();
        assert_eq!(engine.current_pattern(), "C--");
        assert_eq!(engine.guesses_remaining(), 6);
        assert_eq!(engine.candidate_count(), 2);

        engine.apply_guess('c').unwrap();
        assert_eq!(engine.current_pattern(), "C--");
        assert_eq!(engine.guesses_remaining(), 5);
    }

    #[test]
    fn guessed_letters_sorted_and_formatted() {
        let mut engine = engine(&["cat", "car", "cot", "dog", "bee"]);
        engine.reset_round(3, 10, Difficulty::Strict).unwrap();
        for letter in ['t', 'a', 'c', 'e', 's', 'z'] {
            engine.apply_guess(letter).unwrap();
        }
        assert_eq!(engine.guessed_letters(), "[a, c, e, s, t, z]");
    }

    #[test]
    fn guessed_letters_two_letters() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('t').unwrap();
        engine.apply_guess('a').unwrap();
        assert_eq!(engine.guessed_letters(), "[a, t]");
        assert!(engine.was_guessed('t'));
        assert!(!engine.was_guessed('c'));
    }

    #[test]
    fn queries_are_stable_between_guesses() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('o').unwrap();

        let pattern = engine.current_pattern();
        let letters = engine.guessed_letters();
        for _ in 0..3 {
            assert_eq!(engine.current_pattern(), pattern);
            assert_eq!(engine.guessed_letters(), letters);
        }
    }

    #[test]
    fn moderate_relents_on_fourth_guess() {
        // After c, z, y the candidates are car/cat/cot; guess #4 'o' splits
        // them into c-- (2) and co- (1).
        let mut strict = animals();
        let mut moderate = animals();
        strict.reset_round(3, 10, Difficulty::Strict).unwrap();
        moderate.reset_round(3, 10, Difficulty::Moderate).unwrap();

        for letter in ['c', 'z', 'y', 'o'] {
            strict.apply_guess(letter).unwrap();
            moderate.apply_guess(letter).unwrap();
        }

        assert_eq!(strict.current_pattern(), "c--");
        assert_eq!(moderate.current_pattern(), "co-");
        assert_eq!(candidate_words(&moderate), vec!["cot"]);
        assert_eq!(moderate.guesses_remaining(), 8);
    }

    #[test]
    fn relaxed_relents_on_second_guess() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Relaxed).unwrap();
        engine.apply_guess('c').unwrap();
        let outcome = engine.guess('o').unwrap();

        assert!(outcome.selection.relented);
        assert!(outcome.hit);
        assert_eq!(engine.current_pattern(), "co-");
    }

    #[test]
    fn solved_when_pattern_complete() {
        let mut engine = engine(&["cat", "dog"]);
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        for letter in ['c', 'a', 't'] {
            engine.apply_guess(letter).unwrap();
        }
        assert!(!engine.is_solved());
        for letter in ['d', 'o', 'g'] {
            engine.apply_guess(letter).unwrap();
        }
        assert!(engine.is_solved());
        assert_eq!(engine.current_pattern(), "dog");
    }

    #[test]
    fn secret_word_sole_candidate() {
        let mut engine = engine(&["cat", "bird"]);
        engine.reset_round(4, 6, Difficulty::Strict).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(engine.reveal_secret_word(&mut rng), Ok("bird"));
    }

    #[test]
    fn secret_word_is_a_candidate_and_deterministic_with_seed() {
        let mut engine = animals();
        engine.reset_round(3, 6, Difficulty::Strict).unwrap();
        engine.apply_guess('c').unwrap();

        let first = engine
            .reveal_secret_word(&mut StdRng::seed_from_u64(42))
            .unwrap()
            .to_string();
        let second = engine
            .reveal_secret_word(&mut StdRng::seed_from_u64(42))
            .unwrap()
            .to_string();

        assert_eq!(first, second);
        assert!(candidate_words(&engine).contains(&first));
        assert_eq!(engine.candidate_count(), 3);
    }

    #[test]
    fn engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<HangmanEngine>();
    }
}
