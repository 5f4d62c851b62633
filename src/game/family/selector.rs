//! Adversarial family selection
//!
//! Picks which family survives a guess. The hardest family is the largest one,
//! with ties going to the pattern that reveals less and then to the pattern that
//! sorts first. On the cadence set by the difficulty, the runner-up survives
//! instead.

use super::partition::Family;
use crate::core::Difficulty;
use std::cmp::Ordering;

/// Outcome of selecting a family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the surviving family in the slice passed to [`select_family`]
    pub index: usize,
    /// Index of the hardest family
    pub hardest: usize,
    /// Index of the runner-up (equal to `hardest` when only one family exists)
    pub runner_up: usize,
    /// Whether the difficulty swapped in the runner-up
    pub relented: bool,
}

/// Compare two families by how hard they leave the game
///
/// `Ordering::Less` means `a` is harder than `b`: larger size, then smaller
/// reveal cost, then lexicographically smaller pattern.
#[must_use]
pub fn compare_hardness(a: &Family, b: &Family) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.reveal_cost().cmp(&b.reveal_cost()))
        .then_with(|| a.pattern.cmp(&b.pattern))
}

/// Select the surviving family
///
/// `guess_number` counts guesses made this round including the current one.
/// Returns `None` only when `families` is empty.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use evil_hangman::core::{Difficulty, RevealPattern};
/// use evil_hangman::game::{partition, select_family};
///
/// let candidates: Vec<Arc<str>> = ["car", "cat", "cot", "dog"].into_iter().map(Arc::from).collect();
/// let families = partition(&candidates, &RevealPattern::blank(3), 'c');
///
/// let selection = select_family(&families, 1, Difficulty::Strict).unwrap();
/// assert_eq!(families[selection.index].pattern.to_string(), "c--");
/// assert!(!selection.relented);
/// ```
#[must_use]
pub fn select_family(
    families: &[Family],
    guess_number: usize,
    difficulty: Difficulty,
) -> Option<Selection> {
    let hardest = hardest_excluding(families, None)?;
    let runner_up = hardest_excluding(families, Some(hardest)).unwrap_or(hardest);

    let relented = runner_up != hardest && difficulty.relents_on(guess_number);
    let index = if relented { runner_up } else { hardest };

    Some(Selection {
        index,
        hardest,
        runner_up,
        relented,
    })
}

fn hardest_excluding(families: &[Family], excluded: Option<usize>) -> Option<usize> {
    families
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != excluded)
        .min_by(|(_, a), (_, b)| compare_hardness(a, b))
        .map(|(i, _)| i)
}
