//! Display functions for command results

use super::formatters::{distribution_bar, guess_row};
use crate::core::{Guess, Word};
use crate::game::format_countdown;
use crate::stats::Statistics;
use crate::text::{MessageKey, TextProvider};
use chrono::TimeDelta;
use colored::Colorize;

/// Print a single evaluated guess
pub fn print_evaluation(guess: &Guess, answer: &Word) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} against {}",
        guess.word().to_string().bright_white().bold(),
        answer.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}   {}", guess_row(guess), guess.feedback().to_emoji());
    println!(
        "\n  {} correct, {} present",
        guess.feedback().count_correct().to_string().green(),
        guess.feedback().count_present().to_string().yellow()
    );
}

/// Print every guess so far, one coloured row each
pub fn print_board(guesses: &[Guess]) {
    for (i, guess) in guesses.iter().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            guess_row(guess)
        );
    }
}

/// Print the statistics summary and guess distribution
pub fn print_statistics(stats: &Statistics, text: &impl TextProvider) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!(
        "\n   {:<12} {}",
        text.text(MessageKey::Played),
        stats.played.to_string().bright_white().bold()
    );
    println!(
        "   {:<12} {}",
        text.text(MessageKey::WinRate),
        format!("{}%", stats.win_rate()).bright_yellow().bold()
    );
    println!(
        "   {:<12} {}",
        text.text(MessageKey::Streak),
        stats.streak.to_string().bright_white().bold()
    );
    if let Some(average) = stats.average_attempts() {
        println!(
            "   {:<12} {average:.2}",
            text.text(MessageKey::AverageAttempts)
        );
    }

    println!(
        "\n📈 {}",
        format!("{}:", text.text(MessageKey::Distribution))
            .bright_cyan()
            .bold()
    );
    let max = stats.max_bucket();
    for (i, &count) in stats.distribution.iter().enumerate() {
        println!(
            "   {}: {} {count}",
            i + 1,
            distribution_bar(count, max, 30).green()
        );
    }
}

/// Print today's puzzle number and the countdown to the next one
pub fn print_daily(puzzle: i64, remaining: TimeDelta, text: &impl TextProvider) {
    println!(
        "\nDaily puzzle {}",
        format!("#{puzzle}").bright_yellow().bold()
    );
    println!(
        "{}: {}",
        text.text(MessageKey::NextDaily),
        format_countdown(remaining).bright_white()
    );
}
