//! Shareable result text
//!
//! ```text
//! Word Guess #42
//! 3/6
//!
//! ⬛🟩🟩🟨🟩
//! 🟨🟨⬛⬛⬛
//! 🟩🟩🟩🟩🟩
//! ```

use crate::core::Guess;
use crate::game::Session;

const TITLE: &str = "Word Guess";

/// One emoji row per guess, newline separated
#[must_use]
pub fn emoji_grid(guesses: &[Guess]) -> String {
    guesses
        .iter()
        .map(|guess| guess.feedback().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result text for a session
///
/// `puzzle` is the daily puzzle number, `None` for practice games. A lost game
/// shows `X` in place of the attempt count.
#[must_use]
pub fn share_text(session: &Session, puzzle: Option<i64>) -> String {
    let heading = puzzle.map_or_else(|| format!("{TITLE} (practice)"), |n| format!("{TITLE} #{n}"));
    let score = if session.is_won() {
        session.guesses().len().to_string()
    } else {
        "X".to_string()
    };

    format!(
        "{heading}\n{score}/{}\n\n{}",
        session.attempts(),
        emoji_grid(session.guesses())
    )
}
