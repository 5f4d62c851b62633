//! Display functions for game state and command results

use super::formatters::{create_progress_bar, family_table, guesses_bar, spaced_pattern};
use crate::commands::SimulationResult;
use crate::game::{FamilyCounts, HangmanEngine};
use colored::Colorize;
use std::io::{self, Write};

/// Print the pattern, remaining guesses and guessed letters of the active round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_status<W: Write>(out: &mut W, engine: &HangmanEngine) -> io::Result<()> {
    let allowed = engine
        .round_config()
        .map_or(0, |config| config.guesses_allowed);
    let remaining = engine.guesses_remaining();

    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "  Word:     {}",
        spaced_pattern(&engine.current_pattern()).bright_white().bold()
    )?;
    writeln!(
        out,
        "  Guesses:  [{}] {remaining} left",
        guesses_bar(remaining, allowed, 12).yellow()
    )?;
    writeln!(out, "  Guessed:  {}", engine.guessed_letters())?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    Ok(())
}

/// Print the family table for a guess (debug mode)
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_family_report<W: Write>(
    out: &mut W,
    families: &FamilyCounts,
    chosen: &str,
    candidates_left: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "\n  {} ({} families, {candidates_left} words kept)",
        "DEBUG".bright_black().bold(),
        families.len()
    )?;
    for row in family_table(families, chosen) {
        writeln!(out, "    {}", row.bright_black())?;
    }
    Ok(())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!("   Difficulty:       {}", result.difficulty);
    println!(
        "   Player wins:      {}",
        format!("{} ({:.1}%)", result.wins, result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Engine wins:      {}",
        format!("{}", result.rounds - result.wins).red()
    );
    println!(
        "   Avg wrong guesses: {:.2}",
        result.average_wrong_guesses()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Guesses per round:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = (count as f64 / result.rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
