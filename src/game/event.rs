//! Inputs to and outputs from a session
//!
//! A session consumes [`Event`]s and answers with [`Effect`]s describing what the
//! renderer, sound and statistics collaborators should do. Rejections carry
//! abstract reason codes; turning them into text is the front end's job.

use crate::core::{Guess, Letter, Word};
use crate::rules::HardModeViolation;

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Letter(Letter),
    Backspace,
    Submit,
    Hint,
}

/// Why a submission was refused; the session is unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    WordTooShort,
    NotInWordList,
    HardMode(HardModeViolation),
}

impl Rejection {
    /// Stable reason code for text lookup and logs
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WordTooShort => "word_too_short",
            Self::NotInWordList => "word_not_in_list",
            Self::HardMode(_) => "hard_mode_violation",
        }
    }
}

/// What a hint revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Whether the target contains at least one of A, E, I, O, U
    Vowel(bool),
    /// The target's letter at `position`, also typed into the pending row
    Letter { position: usize, letter: Letter },
}

/// Something collaborators should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The active row's letters changed
    InputChanged { row: usize, letters: Vec<Letter> },
    /// A guess was accepted and scored
    Scored { row: usize, guess: Guess },
    Rejected(Rejection),
    HintRevealed(Hint),
    /// The game just ended; emitted exactly once per session
    Finished {
        won: bool,
        target: Word,
        attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_codes() {
        assert_eq!(Rejection::WordTooShort.code(), "word_too_short");
        assert_eq!(Rejection::NotInWordList.code(), "word_not_in_list");
        let violation = HardModeViolation::MissingPresent {
            letter: Letter::new('a').unwrap(),
        };
        assert_eq!(Rejection::HardMode(violation).code(), "hard_mode_violation");
    }
}
