//! Dictionary loading utilities
//!
//! Reads word lists from files or readers into a [`Dictionary`].

use super::Dictionary;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if it holds no
/// usable words.
///
/// # Examples
/// ```no_run
/// use evil_hangman::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    load_from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load dictionary from {}", path.display()))
}

/// Load a dictionary from any buffered reader with one word per line
///
/// Words are folded to lowercase.
///
/// # Errors
///
/// Returns an error on I/O failure or if the input holds no usable words.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Dictionary> {
    let lines = reader
        .lines()
        .map(|line| line.map(|word| word.to_lowercase()))
        .collect::<std::io::Result<Vec<String>>>()
        .context("failed to read word list")?;

    log::debug!("read {} lines from word list", lines.len());

    Ok(Dictionary::new(lines)?)
}
