//! A scored guess

use super::{Feedback, Word};

/// A submitted word together with its feedback
///
/// Only constructible by scoring against an answer, so the feedback always
/// matches the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub fn score(word: Word, answer: &Word) -> Self {
        Self {
            word,
            feedback: Feedback::evaluate(&word, answer),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.feedback.is_perfect()
    }
}
