//! One-off scoring of a guess against an answer

use crate::core::{Guess, Word, WordError};

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns `WordError` if either word is not exactly five ASCII letters.
pub fn evaluate_words(guess: &str, answer: &str) -> Result<(Guess, Word), WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok((Guess::score(guess, &answer), answer))
}
