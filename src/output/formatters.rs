//! Formatting utilities for terminal output

use crate::core::{Guess, Letter, Verdict};
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile, ` A `
#[must_use]
pub fn tile(letter: Letter, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .word()
        .letters()
        .iter()
        .zip(guess.feedback().verdicts())
        .map(|(&letter, &verdict)| tile(letter, Some(verdict)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let max = max.max(1);
    let filled = (value as usize * width / max as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar length for a distribution row, never empty for a non-zero count
#[must_use]
pub fn distribution_bar(count: u32, max: u32, width: usize) -> String {
    let bar = create_progress_bar(count, max, width);
    if count > 0 && !bar.starts_with('█') {
        let mut chars = bar.chars();
        chars.next();
        format!("█{}", chars.as_str())
    } else {
        bar
    }
}
