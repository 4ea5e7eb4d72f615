//! Word lists for the game
//!
//! Provides the embedded answer list and the [`WordBank`] targets are drawn from.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;

/// Ordered, non-empty list of possible target words
///
/// Order matters: the daily puzzle indexes into it by day.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// The bank built from the embedded answer list
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the embedded list is empty.
    pub fn embedded() -> Result<Self, GameError> {
        Self::new(loader::words_from_slice(ANSWERS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at `index`, wrapping around the end of the list
    #[must_use]
    pub fn at(&self, index: usize) -> Word {
        self.words[index % self.words.len()]
    }

    /// Uniformly random word for practice games
    pub fn random<R: Rng>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, uppercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_bank_is_complete() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(bank.len(), ANSWERS_COUNT);
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(WordBank::new(Vec::new()), Err(GameError::EmptyWordList)));
    }

    #[test]
    fn at_wraps_around() {
        let bank = WordBank::new(loader::words_from_slice(&["crane", "slate"])).unwrap();
        assert_eq!(bank.at(0).to_string(), "CRANE");
        assert_eq!(bank.at(3).to_string(), "SLATE");
    }

    #[test]
    fn random_draws_from_bank() {
        let bank = WordBank::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = bank.random(&mut rng);
            assert!(bank.words().contains(&word));
        }
    }
}
