//! Interactive play mode
//!
//! Text-based rounds against the engine, read line by line from any input.

use crate::core::Difficulty;
use crate::game::HangmanEngine;
use crate::output::{print_family_report, print_round_status};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Word length offered when the player just presses enter
pub const DEFAULT_LENGTH: usize = 5;

/// Guess budget offered when the player just presses enter
pub const DEFAULT_GUESSES: u32 = 10;

/// Settings for an interactive session
///
/// Settings left as `None` are asked for at the start of every round.
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    pub length: Option<usize>,
    pub guesses: Option<u32>,
    pub difficulty: Option<Difficulty>,
    /// Print the family table after each guess
    pub debug: bool,
}

/// Run interactive rounds until the player stops or input ends
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails, or if the
/// engine rejects a round it was configured for.
pub fn run_play<R, W, G>(
    engine: &mut HangmanEngine,
    config: &PlayConfig,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(output, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(output, "{}", "          H A N G M A N".bright_red().bold())?;
    writeln!(output, "{}", "═".repeat(40).bright_cyan())?;

    loop {
        let Some((length, guesses, difficulty)) = configure_round(engine, config, input, output)?
        else {
            break;
        };

        engine
            .reset_round(length, guesses, difficulty)
            .context("Failed to start round")?;
        writeln!(
            output,
            "\nI'm thinking of a {length}-letter word. You have {guesses} wrong guesses."
        )?;

        if !play_round(engine, config.debug, input, output)? {
            break;
        }

        let secret = engine.reveal_secret_word(rng)?;
        if engine.is_solved() {
            writeln!(
                output,
                "\n{} The word was {}.",
                "🎉 You win!".bright_green().bold(),
                secret.bright_white().bold()
            )?;
        } else {
            writeln!(
                output,
                "\n{} The word was {}.",
                "💀 Out of guesses.".red().bold(),
                secret.bright_white().bold()
            )?;
        }

        match prompt(input, output, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => break,
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Guess letters until the word is revealed or the budget runs out
///
/// Returns `false` if input ended mid-round.
fn play_round<R: BufRead, W: Write>(
    engine: &mut HangmanEngine,
    debug: bool,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    while !engine.is_solved() && engine.guesses_remaining() > 0 {
        print_round_status(output, engine)?;

        let Some(line) = prompt(input, output, "Guess a letter")? else {
            return Ok(false);
        };
        let Some(letter) = parse_letter(&line) else {
            writeln!(output, "{}", "❌ Enter a single letter.".red())?;
            continue;
        };
        if engine.was_guessed(letter) {
            writeln!(output, "{}", format!("❌ You already guessed '{letter}'.").red())?;
            continue;
        }

        let outcome = engine.guess(letter)?;
        if debug {
            print_family_report(
                output,
                &outcome.families,
                &engine.current_pattern(),
                engine.candidate_count(),
            )?;
        }

        if outcome.hit {
            writeln!(output, "{}", format!("✓ Yes, there is a '{letter}'.").green())?;
        } else {
            writeln!(output, "{}", format!("✗ Sorry, there is no '{letter}'.").yellow())?;
        }
    }

    print_round_status(output, engine)?;
    Ok(true)
}

/// Resolve the settings of the next round, asking for whatever is missing
///
/// Returns `None` if input ended before every setting was known.
fn configure_round<R: BufRead, W: Write>(
    engine: &HangmanEngine,
    config: &PlayConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Option<(usize, u32, Difficulty)>> {
    let length = match config.length {
        Some(length) if engine.count_by_length(length) > 0 => length,
        requested => {
            if let Some(length) = requested {
                writeln!(output, "{}", format!("No words have {length} letters.").red())?;
            }
            let Some(length) = ask_length(engine, input, output)? else {
                return Ok(None);
            };
            length
        }
    };

    let guesses = match config.guesses {
        Some(guesses) if guesses > 0 => guesses,
        _ => {
            let Some(guesses) = ask_guesses(input, output)? else {
                return Ok(None);
            };
            guesses
        }
    };

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => {
            let Some(difficulty) = ask_difficulty(input, output)? else {
                return Ok(None);
            };
            difficulty
        }
    };

    Ok(Some((length, guesses, difficulty)))
}

fn ask_length<R: BufRead, W: Write>(
    engine: &HangmanEngine,
    input: &mut R,
    output: &mut W,
) -> Result<Option<usize>> {
    loop {
        let Some(line) = prompt(input, output, &format!("Word length [{DEFAULT_LENGTH}]"))? else {
            return Ok(None);
        };
        let length = if line.is_empty() {
            DEFAULT_LENGTH
        } else if let Ok(length) = line.parse::<usize>() {
            length
        } else {
            writeln!(output, "{}", "❌ Enter a whole number.".red())?;
            continue;
        };

        if engine.count_by_length(length) > 0 {
            return Ok(Some(length));
        }
        writeln!(output, "{}", format!("No words have {length} letters.").red())?;
    }
}

fn ask_guesses<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<u32>> {
    loop {
        let Some(line) = prompt(input, output, &format!("Wrong guesses allowed [{DEFAULT_GUESSES}]"))?
        else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(DEFAULT_GUESSES));
        }
        match line.parse::<u32>() {
            Ok(guesses) if guesses > 0 => return Ok(Some(guesses)),
            _ => writeln!(output, "{}", "❌ Enter a number greater than zero.".red())?,
        }
    }
}

fn ask_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<Difficulty>> {
    loop {
        let Some(line) = prompt(input, output, "Difficulty: relaxed, moderate or strict [strict]")?
        else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(Difficulty::default()));
        }
        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(e) => writeln!(output, "{}", format!("❌ {e}").red())?,
        }
    }
}

/// Lowercase letter typed on its own, if that is what the line holds
fn parse_letter(line: &str) -> Option<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase()),
        _ => None,
    }
}

/// Write a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}: ")?;
    output.flush().context("Failed to flush output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
