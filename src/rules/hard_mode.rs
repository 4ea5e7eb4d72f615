//! Hard mode constraint checking
//!
//! In hard mode every revealed hint must be reused: letters that were correct stay
//! in place, and letters that were present somewhere must appear somewhere. The
//! constraints accumulate across the whole history, not just the latest guess.

use crate::core::{Guess, Letter, WORD_LENGTH, Word};

/// Why a candidate was refused in hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HardModeViolation {
    /// A letter revealed as correct was moved or dropped
    #[error("Letter {place} must be {letter}", place = .position + 1)]
    MissingCorrect { letter: Letter, position: usize },
    /// A letter revealed as present is missing from the candidate
    #[error("Guess must contain {letter}")]
    MissingPresent { letter: Letter },
}

/// Check `candidate` against every constraint revealed by `history`
///
/// For each prior guess and position: a letter that matched the answer in place
/// must be repeated at that position, and a letter found elsewhere in the answer
/// must appear somewhere in the candidate.
///
/// # Errors
/// Returns the first violation found, scanning guesses in history order and
/// positions left to right.
pub fn validate(
    history: &[Guess],
    candidate: &Word,
    answer: &Word,
) -> Result<(), HardModeViolation> {
    for guess in history {
        let prior = guess.word();
        for position in 0..WORD_LENGTH {
            let letter = prior.letter_at(position);

            if letter == answer.letter_at(position) {
                if candidate.letter_at(position) != letter {
                    return Err(HardModeViolation::MissingCorrect { letter, position });
                }
            } else if answer.contains(letter) && !candidate.contains(letter) {
                return Err(HardModeViolation::MissingPresent { letter });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn history(answer: &Word, guesses: &[&str]) -> Vec<Guess> {
        guesses.iter().map(|g| Guess::score(word(g), answer)).collect()
    }

    #[test]
    fn empty_history_accepts_anything() {
        let answer = word("crane");
        assert_eq!(validate(&[], &word("fuzzy"), &answer), Ok(()));
    }

    #[test]
    fn accepts_candidate_reusing_all_hints() {
        let answer = word("crane");
        // R and E correct, A and C present
        let history = history(&answer, &["trace"]);
        assert_eq!(validate(&history, &word("brace"), &answer), Ok(()));
        assert_eq!(validate(&history, &word("crane"), &answer), Ok(()));
    }

    #[test]
    fn rejects_dropped_correct_letter() {
        let answer = word("crane");
        let history = history(&answer, &["trace"]);
        assert_eq!(
            validate(&history, &word("cared"), &answer),
            Err(HardModeViolation::MissingCorrect {
                letter: Letter::new('R').unwrap(),
                position: 1,
            })
        );
    }

    #[test]
    fn repeated_letter_in_history_needs_only_one_copy() {
        let answer = word("abide");
        // Both Es of SPEED are out of place, D is present
        let history = history(&answer, &["speed"]);
        assert_eq!(validate(&history, &word("oxide"), &answer), Ok(()));
        assert_eq!(
            validate(&history, &word("elite"), &answer),
            Err(HardModeViolation::MissingPresent {
                letter: Letter::new('D').unwrap(),
            })
        );
    }

    #[test]
    fn rejects_missing_present_letter() {
        let answer = word("crane");
        // S, O, U, T absent; C present
        let history = history(&answer, &["scout"]);
        assert_eq!(
            validate(&history, &word("plumb"), &answer),
            Err(HardModeViolation::MissingPresent {
                letter: Letter::new('C').unwrap()
            })
        );
        assert_eq!(validate(&history, &word("cable"), &answer), Ok(()));
    }

    #[test]
    fn constraints_accumulate_over_all_guesses() {
        let answer = word("crane");
        // First guess reveals N present, second reveals R correct
        let history = history(&answer, &["nymph", "frost"]);
        // Keeps R but forgets N from the first guess
        assert_eq!(
            validate(&history, &word("brick"), &answer),
            Err(HardModeViolation::MissingPresent {
                letter: Letter::new('N').unwrap()
            })
        );
        assert_eq!(validate(&history, &word("brine"), &answer), Ok(()));
    }

    #[test]
    fn absent_letters_are_not_constrained() {
        let answer = word("crane");
        let history = history(&answer, &["built"]);
        assert_eq!(validate(&history, &word("built"), &answer), Ok(()));
        assert_eq!(validate(&history, &word("moody"), &answer), Ok(()));
    }

    #[test]
    fn violation_messages_are_one_based() {
        let violation = HardModeViolation::MissingCorrect {
            letter: Letter::new('R').unwrap(),
            position: 1,
        };
        assert_eq!(violation.to_string(), "Letter 2 must be R");
    }
}
