//! User-facing text
//!
//! The game reports abstract codes ([`Rejection`], [`Hint`], outcomes). Front
//! ends turn them into words through a [`TextProvider`]; only English ships.

use crate::game::{Hint, Rejection, Session};

/// Every piece of fixed text the front ends show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    WordTooShort,
    WordNotInList,
    HardModeViolation,
    Won,
    Lost,
    Answer,
    NextDaily,
    HintVowel,
    HintNoVowel,
    HintLetterAt,
    NoHintsLeft,
    HintRowFull,
    Played,
    WinRate,
    Streak,
    AverageAttempts,
    Distribution,
    HardModeOn,
    HardModeOff,
}

impl From<Rejection> for MessageKey {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::WordTooShort => Self::WordTooShort,
            Rejection::NotInWordList => Self::WordNotInList,
            Rejection::HardMode(_) => Self::HardModeViolation,
        }
    }
}

pub trait TextProvider {
    fn text(&self, key: MessageKey) -> &str;

    /// Full message for a rejected guess, including hard-mode details
    fn rejection(&self, rejection: Rejection) -> String {
        match rejection {
            Rejection::HardMode(violation) => {
                format!("{}: {violation}", self.text(MessageKey::HardModeViolation))
            }
            other => self.text(other.into()).to_string(),
        }
    }

    /// Full message for a revealed hint
    fn hint(&self, hint: Hint) -> String {
        match hint {
            Hint::Vowel(true) => self.text(MessageKey::HintVowel).to_string(),
            Hint::Vowel(false) => self.text(MessageKey::HintNoVowel).to_string(),
            Hint::Letter { position, letter } => {
                format!("{} {}: {letter}", self.text(MessageKey::HintLetterAt), position + 1)
            }
        }
    }
}

/// Why a hint request revealed nothing, `None` once the game is over
///
/// A full row keeps the hint; only an exhausted allowance is reported as such.
#[must_use]
pub const fn unused_hint_reason(session: &Session) -> Option<MessageKey> {
    if session.is_over() {
        None
    } else if session.hints_remaining() == 0 {
        Some(MessageKey::NoHintsLeft)
    } else {
        Some(MessageKey::HintRowFull)
    }
}

/// Built-in English text
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl TextProvider for English {
    fn text(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::WordTooShort => "Not enough letters",
            MessageKey::WordNotInList => "Not in word list",
            MessageKey::HardModeViolation => "Hard mode",
            MessageKey::Won => "You won!",
            MessageKey::Lost => "Out of guesses",
            MessageKey::Answer => "The word was",
            MessageKey::NextDaily => "Next daily puzzle in",
            MessageKey::HintVowel => "The word contains a vowel",
            MessageKey::HintNoVowel => "The word has no vowels",
            MessageKey::HintLetterAt => "Letter at position",
            MessageKey::NoHintsLeft => "No hints left",
            MessageKey::HintRowFull => "Delete a letter to make room for a hint",
            MessageKey::Played => "Played",
            MessageKey::WinRate => "Win %",
            MessageKey::Streak => "Streak",
            MessageKey::AverageAttempts => "Avg guesses",
            MessageKey::Distribution => "Guess distribution",
            MessageKey::HardModeOn => "Hard mode on",
            MessageKey::HardModeOff => "Hard mode off",
        }
    }
}
