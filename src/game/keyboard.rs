//! Best known verdict per letter, for colouring a keyboard

use crate::core::{Guess, Letter, Verdict};

/// Strongest verdict seen for each letter across all guesses
///
/// `Correct` beats `Present`, which beats `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    letters: [Option<Verdict>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn from_guesses(guesses: &[Guess]) -> Self {
        let mut state = Self::default();
        for guess in guesses {
            for (letter, verdict) in guess
                .word()
                .letters()
                .iter()
                .zip(guess.feedback().verdicts())
            {
                let slot = &mut state.letters[letter.index()];
                *slot = (*slot).max(Some(*verdict));
            }
        }
        state
    }

    #[must_use]
    pub const fn status(&self, letter: Letter) -> Option<Verdict> {
        self.letters[letter.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn best_verdict_wins() {
        let answer = Word::new("crane").unwrap();
        let guesses = [
            Guess::score(Word::new("react").unwrap(), &answer),
            Guess::score(Word::new("trace").unwrap(), &answer),
        ];
        let keyboard = KeyboardState::from_guesses(&guesses);

        // R present in REACT, correct in TRACE
        assert_eq!(keyboard.status(letter('r')), Some(Verdict::Correct));
        assert_eq!(keyboard.status(letter('c')), Some(Verdict::Present));
        assert_eq!(keyboard.status(letter('t')), Some(Verdict::Absent));
        assert_eq!(keyboard.status(letter('z')), None);
    }
}
