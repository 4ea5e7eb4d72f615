//! Per-letter feedback for a guess
//!
//! Each position of a guess gets one of three verdicts:
//! - `Correct`: right letter, right position
//! - `Present`: letter occurs elsewhere in the answer (and that copy is not already claimed)
//! - `Absent`: no unclaimed copy of the letter is left in the answer

use super::word::{WORD_LENGTH, Word};

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji tile used for share grids and history lines
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a whole guess, one verdict per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// Duplicate letters are handled the standard way: exact matches claim their
    /// answer position first, then remaining letters claim the earliest unclaimed
    /// matching answer position.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and consume those answer positions
    /// 2. Second pass: For every other position, scan unconsumed answer positions
    ///    left to right; the first match becomes `Present` and is consumed
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let answer = Word::new("floor").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer);
    ///
    /// use Verdict::*;
    /// assert_eq!(feedback.verdicts(), &[Present, Present, Absent, Correct, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = Verdict::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: misplaced letters, earliest unconsumed answer copy wins
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                result[i] = Verdict::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn verdict_at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}
