//! Reveal pattern representation
//!
//! A reveal pattern shows which letters of the hidden word are known. Each slot
//! holds either a revealed letter or the placeholder `-`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Character rendered for an unrevealed slot
pub const PLACEHOLDER: char = '-';

/// Revealed letters of the hidden word, one slot per character
///
/// Patterns order by their rendered string (character code ascending), which is
/// the final tie-break when choosing between families.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealPattern {
    slots: Vec<Option<char>>,
}

impl RevealPattern {
    /// Create an all-placeholder pattern of the given length
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::RevealPattern;
    ///
    /// let pattern = RevealPattern::blank(4);
    /// assert_eq!(pattern.to_string(), "----");
    /// ```
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The pattern `word` would produce if `letter` were guessed now
    ///
    /// Every position where `word` has `letter` is revealed; all other slots keep
    /// whatever they already showed.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::RevealPattern;
    ///
    /// let pattern: RevealPattern = "c--".parse().unwrap();
    /// assert_eq!(pattern.overlay("cot", 'o').to_string(), "co-");
    /// assert_eq!(pattern.overlay("cat", 'o').to_string(), "c--");
    /// ```
    #[must_use]
    pub fn overlay(&self, word: &str, letter: char) -> Self {
        let mut slots = self.slots.clone();
        for (slot, ch) in slots.iter_mut().zip(word.chars()) {
            if ch == letter {
                *slot = Some(letter);
            }
        }
        Self { slots }
    }

    /// Number of revealed slots
    #[must_use]
    pub fn reveal_cost(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if `letter` is revealed anywhere
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.slots.contains(&Some(letter))
    }

    /// Check if every slot is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Check that `word` agrees with every revealed slot
    #[must_use]
    pub fn is_consistent_with(&self, word: &str) -> bool {
        word.chars().count() == self.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, ch)| slot.is_none_or(|revealed| revealed == ch))
    }

    fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().map(|slot| slot.unwrap_or(PLACEHOLDER))
    }
}

impl Ord for RevealPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.glyphs()
            .cmp(other.glyphs())
            .then_with(|| self.slots.cmp(&other.slots))
    }
}

impl PartialOrd for RevealPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RevealPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in self.glyphs() {
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

impl FromStr for RevealPattern {
    type Err = std::convert::Infallible;

    /// Parse a rendered pattern; `-` becomes an unrevealed slot
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            slots: s
                .chars()
                .map(|ch| (ch != PLACEHOLDER).then_some(ch))
                .collect(),
        })
    }
}
