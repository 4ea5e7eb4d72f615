//! Letters and 5-letter words
//!
//! A `Word` is a fixed array of five uppercase ASCII letters. Anything that is not
//! a letter or not exactly five characters long is rejected at construction, so the
//! rest of the crate never has to re-check length or alphabet.

use std::fmt;
use std::str::FromStr;

/// Number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A single uppercase letter `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters, found '{0}'")]
    InvalidCharacter(char),
}

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacter` for anything outside `a-z` / `A-Z`.
    pub const fn new(c: char) -> Result<Self, WordError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(WordError::InvalidCharacter(c))
        }
    }

    /// Get the letter as an uppercase `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Get the letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Alphabet index, `A` = 0
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self.0, b'A' | b'E' | b'I' | b'O' | b'U')
    }
}

impl TryFrom<char> for Letter {
    type Error = WordError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A 5-letter word, always stored uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([Letter; WORD_LENGTH]);

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [Letter(b'A'); WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::new(c)?;
        }

        Ok(Self(letters))
    }

    /// Build a word from already validated letters
    #[must_use]
    pub const fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.0[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }

    /// Count occurrences of a letter
    #[must_use]
    pub fn count_of(&self, letter: Letter) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }

    #[must_use]
    pub fn has_vowel(&self) -> bool {
        self.0.iter().any(|l| l.is_vowel())
    }

    /// Lowercase form, as used by dictionary URLs
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.0
            .iter()
            .map(|l| l.as_char().to_ascii_lowercase())
            .collect()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
