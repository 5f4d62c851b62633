//! Partitioning candidates into families
//!
//! Given a pending guess, every candidate word maps to the reveal pattern the
//! guess would produce for it. Words sharing a pattern form a family.

use crate::core::RevealPattern;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Candidate words that share one reveal pattern for a pending guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub pattern: RevealPattern,
    pub words: Vec<Arc<str>>,
}

impl Family {
    /// Number of words in the family
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Number of revealed slots in the family's pattern
    #[inline]
    #[must_use]
    pub fn reveal_cost(&self) -> usize {
        self.pattern.reveal_cost()
    }
}

/// Diagnostic view of a partition: rendered pattern to family size
pub type FamilyCounts = BTreeMap<String, usize>;

/// Group candidates by the pattern `letter` would reveal on top of `current`
///
/// Families come back ordered by pattern, and words keep the order they had in
/// `candidates`, so the result is deterministic for a given input.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use evil_hangman::core::RevealPattern;
/// use evil_hangman::game::partition;
///
/// let candidates: Vec<Arc<str>> = ["car", "cat", "cot", "dog"].into_iter().map(Arc::from).collect();
/// let families = partition(&candidates, &RevealPattern::blank(3), 'c');
///
/// assert_eq!(families.len(), 2);
/// assert_eq!(families[0].pattern.to_string(), "---");
/// assert_eq!(families[1].pattern.to_string(), "c--");
/// assert_eq!(families[1].size(), 3);
/// ```
#[must_use]
pub fn partition(candidates: &[Arc<str>], current: &RevealPattern, letter: char) -> Vec<Family> {
    let mut groups: FxHashMap<RevealPattern, Vec<Arc<str>>> = FxHashMap::default();

    for word in candidates {
        let pattern = current.overlay(word, letter);
        groups.entry(pattern).or_default().push(Arc::clone(word));
    }

    let mut families: Vec<Family> = groups
        .into_iter()
        .map(|(pattern, words)| Family { pattern, words })
        .collect();
    families.sort_unstable_by(|a, b| a.pattern.cmp(&b.pattern));
    families
}

/// Summarize families as rendered pattern to word count
#[must_use]
pub fn family_counts(families: &[Family]) -> FamilyCounts {
    families
        .iter()
        .map(|family| (family.pattern.to_string(), family.size()))
        .collect()
}
