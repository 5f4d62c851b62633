//! Automated rounds against the engine
//!
//! A letter-frequency guesser plays many rounds, each against a fresh engine
//! built from the shared dictionary, and the results are aggregated.

use crate::core::{Difficulty, HangmanError};
use crate::dictionary::Dictionary;
use crate::game::HangmanEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub rounds: usize,
    /// Word length of every round; a random available length per round if `None`
    pub length: Option<usize>,
    pub guesses: u32,
    pub difficulty: Difficulty,
    /// Base seed; round `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            rounds: 200,
            length: None,
            guesses: 10,
            difficulty: Difficulty::Strict,
            seed: None,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word_length: usize,
    pub won: bool,
    pub guesses_used: usize,
    pub wrong_guesses: u32,
    pub secret: String,
}

/// Aggregated results of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub rounds: usize,
    pub wins: usize,
    pub difficulty: Difficulty,
    pub duration: Duration,
    /// Letters guessed per round, to number of rounds
    pub distribution: BTreeMap<usize, usize>,
    pub total_wrong_guesses: u64,
}

impl SimulationResult {
    /// Fraction of rounds the guesser won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }

    #[must_use]
    pub fn average_wrong_guesses(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_wrong_guesses as f64 / self.rounds as f64
        }
    }
}

/// Play `config.rounds` rounds in parallel and aggregate the results
///
/// # Errors
///
/// Returns `NoWordsOfLength` if a fixed length was requested that the
/// dictionary lacks, or any error the engine reports while playing.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulateConfig,
) -> Result<SimulationResult, HangmanError> {
    let lengths = match config.length {
        Some(length) if dictionary.count_by_length(length) == 0 => {
            return Err(HangmanError::NoWordsOfLength(length));
        }
        Some(length) => vec![length],
        None => dictionary.lengths(),
    };
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "simulating {} rounds at {} with seed {seed}",
        config.rounds,
        config.difficulty
    );

    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let result = play_round(dictionary, &lengths, config, seed.wrapping_add(i as u64));
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let mut distribution = BTreeMap::new();
    for result in &results {
        *distribution.entry(result.guesses_used).or_insert(0) += 1;
    }

    Ok(SimulationResult {
        rounds: results.len(),
        wins: results.iter().filter(|result| result.won).count(),
        difficulty: config.difficulty,
        duration,
        distribution,
        total_wrong_guesses: results
            .iter()
            .map(|result| u64::from(result.wrong_guesses))
            .sum(),
    })
}

/// Play one round against a fresh engine with its own seeded RNG
///
/// # Errors
///
/// Returns any error the engine reports.
pub fn play_round(
    dictionary: &Dictionary,
    lengths: &[usize],
    config: &SimulateConfig,
    seed: u64,
) -> Result<RoundResult, HangmanError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let word_length = *lengths.choose(&mut rng).ok_or(HangmanError::EmptyDictionary)?;

    let mut engine = HangmanEngine::new(dictionary.clone());
    engine.reset_round(word_length, config.guesses, config.difficulty)?;

    while !engine.is_solved() && engine.guesses_remaining() > 0 {
        let Some(letter) = most_common_letter(&engine, &mut rng) else {
            break;
        };
        engine.apply_guess(letter)?;
    }

    Ok(RoundResult {
        word_length,
        won: engine.is_solved(),
        guesses_used: engine.guesses_made(),
        wrong_guesses: config.guesses - engine.guesses_remaining(),
        secret: engine.reveal_secret_word(&mut rng)?.to_string(),
    })
}

/// Unguessed letter found in the most candidates, ties broken at random
#[must_use]
pub fn most_common_letter<R: Rng + ?Sized>(engine: &HangmanEngine, rng: &mut R) -> Option<char> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for word in engine.candidates() {
        let letters: BTreeSet<char> = word
            .chars()
            .filter(|&letter| !engine.was_guessed(letter))
            .collect();
        for letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    let best = counts.values().copied().max()?;
    let mut tied: Vec<char> = counts
        .into_iter()
        .filter(|&(_, count)| count == best)
        .map(|(letter, _)| letter)
        .collect();
    tied.sort_unstable();
    tied.choose(rng).copied()
}
