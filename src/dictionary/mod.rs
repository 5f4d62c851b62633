//! Dictionary of source words
//!
//! The dictionary is fixed at construction and shared read-only by every round an
//! engine plays. Cloning is cheap, so one engine per round can be built from the
//! same dictionary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::{HangmanError, PLACEHOLDER};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Immutable, non-empty set of words in sorted order
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<[Arc<str>]>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Words are trimmed but otherwise kept exactly as given, so `Cat` and `cat`
    /// are different words. Blank entries, entries containing whitespace and
    /// entries containing the placeholder `-` are skipped, and duplicates
    /// collapse into one.
    ///
    /// # Errors
    /// Returns `HangmanError::EmptyDictionary` if no word survives.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["cat", "Cat", "cot", "dog", "cat"]).unwrap();
    /// assert_eq!(dictionary.len(), 4);
    /// assert_eq!(dictionary.count_by_length(3), 4);
    /// assert!(Dictionary::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = words
            .into_iter()
            .filter_map(|word| usable(word.as_ref()).map(str::to_string))
            .collect();

        if unique.is_empty() {
            return Err(HangmanError::EmptyDictionary);
        }

        Ok(Self {
            words: unique.into_iter().map(Arc::<str>::from).collect(),
        })
    }

    /// Build the dictionary bundled with the crate
    ///
    /// # Errors
    /// Only fails if the bundled list is empty.
    pub fn embedded() -> Result<Self, HangmanError> {
        Self::new(DICTIONARY)
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; an empty dictionary cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in sorted order
    #[must_use]
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Count the words with exactly `length` characters
    #[must_use]
    pub fn count_by_length(&self, length: usize) -> usize {
        self.words
            .iter()
            .filter(|word| word.chars().count() == length)
            .count()
    }

    /// The words with exactly `length` characters, in sorted order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<Arc<str>> {
        self.words
            .iter()
            .filter(|word| word.chars().count() == length)
            .cloned()
            .collect()
    }

    /// Distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.words
            .iter()
            .map(|word| word.chars().count())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn usable(word: &str) -> Option<&str> {
    let trimmed = word.trim();
    let rejected = trimmed.is_empty()
        || trimmed
            .chars()
            .any(|ch| ch.is_whitespace() || ch == PLACEHOLDER);
    (!rejected).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::new(["cat", "car", "cot", "dog", "bird", "horse"]).unwrap()
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert_eq!(
            Dictionary::new(Vec::<&str>::new()).unwrap_err(),
            HangmanError::EmptyDictionary
        );
        assert_eq!(
            Dictionary::new(["", "   "]).unwrap_err(),
            HangmanError::EmptyDictionary
        );
    }

    #[test]
    fn words_trimmed_and_deduplicated() {
        let dictionary = Dictionary::new([" cat", "cat", "cat ", "dog"]).unwrap();
        let words: Vec<&str> = dictionary.words().iter().map(AsRef::as_ref).collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn case_is_preserved() {
        let dictionary = Dictionary::new(["Cat", "cat", "dog"]).unwrap();
        let words: Vec<&str> = dictionary.words().iter().map(AsRef::as_ref).collect();
        assert_eq!(words, vec!["Cat", "cat", "dog"]);
        assert_eq!(dictionary.count_by_length(3), 3);
    }

    #[test]
    fn length_counts_the_word_as_given() {
        // U+0130 is one character but lowercases to two.
        let dictionary = Dictionary::new(["\u{130}x"]).unwrap();
        assert_eq!(dictionary.count_by_length(2), 1);
        assert_eq!(dictionary.count_by_length(3), 0);
    }

    #[test]
    fn words_with_placeholder_skipped() {
        let dictionary = Dictionary::new(["x-ray", "ray"]).unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.count_by_length(5), 0);
    }

    #[test]
    fn phrases_with_spaces_skipped() {
        let dictionary = Dictionary::new(["ice cream", "cone"]).unwrap();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn count_by_length_matches() {
        let dictionary = sample();
        assert_eq!(dictionary.count_by_length(3), 4);
        assert_eq!(dictionary.count_by_length(4), 1);
        assert_eq!(dictionary.count_by_length(5), 1);
        assert_eq!(dictionary.count_by_length(7), 0);
        assert_eq!(dictionary.count_by_length(0), 0);
    }

    #[test]
    fn words_of_length_sorted() {
        let words: Vec<String> = sample()
            .words_of_length(3)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(words, vec!["car", "cat", "cot", "dog"]);
    }

    #[test]
    fn lengths_ascending_and_distinct() {
        assert_eq!(sample().lengths(), vec![3, 4, 5]);
    }

    #[test]
    fn clones_share_storage() {
        let dictionary = sample();
        let clone = dictionary.clone();
        assert!(Arc::ptr_eq(&dictionary.words, &clone.words));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::embedded().unwrap();
        assert!(dictionary.len() <= DICTIONARY_COUNT);
        assert!(dictionary.count_by_length(3) > 0);
        assert!(dictionary.count_by_length(5) > 0);
    }
}
