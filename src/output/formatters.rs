//! Formatting utilities for terminal output

use crate::game::FamilyCounts;

/// Spread a pattern out for display, e.g. `c--` becomes `c - -`
#[must_use]
pub fn spaced_pattern(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    for (i, ch) in pattern.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of remaining guesses out of the round's budget
#[must_use]
pub fn guesses_bar(remaining: u32, allowed: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(allowed), width)
}

/// Lines of the family table shown in debug mode, largest family first
///
/// Ties keep pattern order so the table is stable between runs.
#[must_use]
pub fn family_table(families: &FamilyCounts, chosen: &str) -> Vec<String> {
    let mut rows: Vec<(&String, &usize)> = families.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let width = rows.iter().map(|(pattern, _)| pattern.chars().count()).max().unwrap_or(0);

    rows.into_iter()
        .map(|(pattern, count)| {
            let marker = if pattern == chosen { "→" } else { " " };
            format!("{marker} {pattern:<width$}  {count}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_inserts_spaces() {
        assert_eq!(spaced_pattern("c--"), "c - -");
        assert_eq!(spaced_pattern("a"), "a");
        assert_eq!(spaced_pattern(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn guesses_bar_tracks_remaining() {
        assert_eq!(guesses_bar(3, 6, 6), "███░░░");
    }

    #[test]
    fn family_table_largest_first_with_marker() {
        let families: FamilyCounts = [("---".to_string(), 1), ("c--".to_string(), 3)]
            .into_iter()
            .collect();

        let rows = family_table(&families, "c--");
        assert_eq!(rows, vec!["→ c--  3".to_string(), "  ---  1".to_string()]);
    }
}
