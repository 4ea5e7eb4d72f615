//! Game session state machine
//!
//! A session is the single source of truth for one game. It moves from
//! `InProgress` to either `Won` or `Lost` and is frozen from then on. Every
//! transition returns the effects it produced; illegal inputs simply produce none.

use super::event::{Effect, Event, Hint, Rejection};
use super::{DEFAULT_ATTEMPTS, DEFAULT_HINTS, GameMode};
use crate::core::{Guess, Letter, WORD_LENGTH, Word};
use crate::dictionary::WordOracle;
use crate::rules::hard_mode;
use tracing::{debug, info};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Per-game limits and options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Attempt budget
    pub attempts: usize,
    /// Hints available at the start of each game
    pub hints: u32,
    pub hard_mode: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            hints: DEFAULT_HINTS,
            hard_mode: false,
        }
    }
}

/// One game from first letter to win or loss
#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    target: Word,
    guesses: Vec<Guess>,
    pending: Vec<Letter>,
    status: Status,
    hard_mode: bool,
    hints_remaining: u32,
    attempts: usize,
}

impl Session {
    #[must_use]
    pub fn new(mode: GameMode, target: Word, rules: Rules) -> Self {
        Self {
            mode,
            target,
            guesses: Vec::with_capacity(rules.attempts),
            pending: Vec::with_capacity(WORD_LENGTH),
            status: Status::InProgress,
            hard_mode: rules.hard_mode,
            hints_remaining: rules.hints,
            attempts: rules.attempts.max(1),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Letters typed into the active row
    #[must_use]
    pub fn pending(&self) -> &[Letter] {
        &self.pending
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, Status::InProgress)
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.status, Status::Won)
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub const fn set_hard_mode(&mut self, enabled: bool) {
        self.hard_mode = enabled;
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Index of the row currently being typed
    #[must_use]
    pub fn active_row(&self) -> usize {
        self.guesses.len()
    }

    /// Apply one event and report what changed
    pub fn apply(&mut self, event: Event, oracle: &mut WordOracle) -> Vec<Effect> {
        match event {
            Event::Letter(letter) => self.append_letter(letter).into_iter().collect(),
            Event::Backspace => self.delete_letter().into_iter().collect(),
            Event::Submit => self.submit(oracle),
            Event::Hint => self.use_hint(),
        }
    }

    /// Type a letter into the active row; ignored when the row is full or the game is over
    pub fn append_letter(&mut self, letter: Letter) -> Option<Effect> {
        if self.is_over() || self.pending.len() >= WORD_LENGTH {
            return None;
        }
        self.pending.push(letter);
        Some(self.input_changed())
    }

    /// Remove the last typed letter; ignored when the row is empty or the game is over
    pub fn delete_letter(&mut self) -> Option<Effect> {
        if self.is_over() {
            return None;
        }
        self.pending.pop()?;
        Some(self.input_changed())
    }

    /// Submit the active row
    ///
    /// The word must be complete, acceptable to the oracle and, in hard mode,
    /// consistent with every earlier hint. Any refusal leaves the session untouched.
    pub fn submit(&mut self, oracle: &mut WordOracle) -> Vec<Effect> {
        if self.is_over() {
            return Vec::new();
        }

        let Some(word) = self.pending_word() else {
            debug!(letters = self.pending.len(), "Rejected incomplete guess");
            return vec![Effect::Rejected(Rejection::WordTooShort)];
        };

        if !oracle.is_valid(&word) {
            debug!(word = %word, "Rejected word not in list");
            return vec![Effect::Rejected(Rejection::NotInWordList)];
        }

        if self.hard_mode
            && let Err(violation) = hard_mode::validate(&self.guesses, &word, &self.target)
        {
            debug!(word = %word, %violation, "Rejected hard mode violation");
            return vec![Effect::Rejected(Rejection::HardMode(violation))];
        }

        let guess = Guess::score(word, &self.target);
        let row = self.guesses.len();
        self.guesses.push(guess);
        self.pending.clear();

        if guess.is_correct() {
            self.status = Status::Won;
        } else if self.guesses.len() >= self.attempts {
            self.status = Status::Lost;
        }

        let mut effects = vec![Effect::Scored { row, guess }];
        if self.is_over() {
            info!(
                won = self.is_won(),
                attempts = self.guesses.len(),
                mode = %self.mode,
                "Game finished"
            );
            effects.push(Effect::Finished {
                won: self.is_won(),
                target: self.target,
                attempts: self.guesses.len(),
            });
        } else {
            effects.push(self.input_changed());
        }
        effects
    }

    /// Spend a hint
    ///
    /// Before anything has been typed or guessed the hint only says whether the
    /// target has a vowel. Afterwards it reveals, and types, the target's letter at
    /// the next empty position of the active row. A full row has no such position,
    /// so the hint is kept.
    pub fn use_hint(&mut self) -> Vec<Effect> {
        if self.is_over() || self.hints_remaining == 0 {
            return Vec::new();
        }

        if self.guesses.is_empty() && self.pending.is_empty() {
            self.hints_remaining -= 1;
            return vec![Effect::HintRevealed(Hint::Vowel(self.target.has_vowel()))];
        }

        let position = self.pending.len();
        if position >= WORD_LENGTH {
            return Vec::new();
        }

        self.hints_remaining -= 1;
        let letter = self.target.letter_at(position);
        let mut effects = vec![Effect::HintRevealed(Hint::Letter { position, letter })];
        effects.extend(self.append_letter(letter));
        effects
    }

    fn pending_word(&self) -> Option<Word> {
        <[Letter; WORD_LENGTH]>::try_from(self.pending.as_slice())
            .ok()
            .map(Word::from_letters)
    }

    fn input_changed(&self) -> Effect {
        Effect::InputChanged {
            row: self.active_row(),
            letters: self.pending.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::rules::HardModeViolation;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn session(target: &str) -> Session {
        Session::new(GameMode::Practice, word(target), Rules::default())
    }

    fn oracle() -> WordOracle {
        WordOracle::new(
            ["crane", "trace", "slate", "brace", "cared", "scout", "plumb", "ghost", "light"]
                .map(word),
        )
    }

    fn type_word(session: &mut Session, text: &str) {
        for c in text.chars() {
            session.append_letter(letter(c));
        }
    }

    fn guess(session: &mut Session, oracle: &mut WordOracle, text: &str) -> Vec<Effect> {
        type_word(session, text);
        session.submit(oracle)
    }

    #[test]
    fn append_beyond_five_is_noop() {
        let mut s = session("crane");
        type_word(&mut s, "crane");
        let before = s.pending().to_vec();

        assert_eq!(s.append_letter(letter('x')), None);
        assert_eq!(s.pending(), before.as_slice());
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut s = session("crane");
        assert_eq!(s.delete_letter(), None);
        assert!(s.pending().is_empty());

        s.append_letter(letter('c'));
        assert_eq!(
            s.delete_letter(),
            Some(Effect::InputChanged {
                row: 0,
                letters: vec![]
            })
        );
    }

    #[test]
    fn short_submission_is_rejected_without_change() {
        let mut s = session("crane");
        let mut o = oracle();
        let effects = guess(&mut s, &mut o, "cra");

        assert_eq!(effects, vec![Effect::Rejected(Rejection::WordTooShort)]);
        assert_eq!(s.pending().len(), 3);
        assert!(s.guesses().is_empty());
    }

    #[test]
    fn rejected_word_keeps_input() {
        let mut s = session("crane");
        let mut o = oracle();
        let junk = word("qwxyz");
        o.is_valid(&junk);
        o.take_pending();
        o.resolve(junk, false);

        let effects = guess(&mut s, &mut o, "qwxyz");
        assert_eq!(effects, vec![Effect::Rejected(Rejection::NotInWordList)]);
        assert_eq!(s.pending().len(), 5);
        assert!(s.guesses().is_empty());
    }

    #[test]
    fn unknown_word_is_accepted_provisionally() {
        let mut s = session("crane");
        let mut o = oracle();
        let effects = guess(&mut s, &mut o, "zesty");

        assert!(matches!(effects[0], Effect::Scored { row: 0, .. }));
        assert_eq!(o.take_pending(), vec![word("zesty")]);
    }

    #[test]
    fn scored_guess_clears_input() {
        let mut s = session("crane");
        let mut o = oracle();
        let effects = guess(&mut s, &mut o, "trace");

        let scored = Guess::score(word("trace"), &word("crane"));
        assert_eq!(
            effects,
            vec![
                Effect::Scored {
                    row: 0,
                    guess: scored
                },
                Effect::InputChanged {
                    row: 1,
                    letters: vec![]
                },
            ]
        );
        assert!(s.pending().is_empty());
        assert_eq!(s.status(), Status::InProgress);
    }

    #[test]
    fn winning_on_attempt_k_finishes_game() {
        for k in 1..=6 {
            let mut s = session("crane");
            let mut o = oracle();
            for _ in 1..k {
                guess(&mut s, &mut o, "ghost");
            }
            let effects = guess(&mut s, &mut o, "crane");

            assert!(s.is_over());
            assert!(s.is_won());
            assert_eq!(
                effects.last(),
                Some(&Effect::Finished {
                    won: true,
                    target: word("crane"),
                    attempts: k
                })
            );
        }
    }

    #[test]
    fn six_misses_lose_game() {
        let mut s = session("crane");
        let mut o = oracle();
        for _ in 0..5 {
            guess(&mut s, &mut o, "ghost");
            assert!(!s.is_over());
        }
        let effects = guess(&mut s, &mut o, "light");

        assert_eq!(s.status(), Status::Lost);
        assert_eq!(
            effects.last(),
            Some(&Effect::Finished {
                won: false,
                target: word("crane"),
                attempts: 6
            })
        );
    }

    #[test]
    fn finished_game_is_frozen() {
        let mut s = session("crane");
        let mut o = oracle();
        guess(&mut s, &mut o, "crane");

        assert!(s.apply(Event::Letter(letter('a')), &mut o).is_empty());
        assert!(s.apply(Event::Backspace, &mut o).is_empty());
        assert!(s.apply(Event::Submit, &mut o).is_empty());
        assert!(s.apply(Event::Hint, &mut o).is_empty());
        assert!(s.pending().is_empty());
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn hard_mode_rejects_dropped_hint() {
        let rules = Rules {
            hard_mode: true,
            ..Rules::default()
        };
        let mut s = Session::new(GameMode::Daily, word("crane"), rules);
        let mut o = oracle();
        guess(&mut s, &mut o, "trace");

        let effects = guess(&mut s, &mut o, "cared");
        assert_eq!(
            effects,
            vec![Effect::Rejected(Rejection::HardMode(
                HardModeViolation::MissingCorrect {
                    letter: letter('r'),
                    position: 1
                }
            ))]
        );
        assert_eq!(s.guesses().len(), 1);

        while s.delete_letter().is_some() {}
        let effects = guess(&mut s, &mut o, "brace");
        assert!(matches!(effects[0], Effect::Scored { row: 1, .. }));
    }

    #[test]
    fn hard_mode_off_allows_anything_valid() {
        let mut s = session("crane");
        let mut o = oracle();
        guess(&mut s, &mut o, "trace");
        let effects = guess(&mut s, &mut o, "cared");
        assert!(matches!(effects[0], Effect::Scored { row: 1, .. }));
    }

    #[test]
    fn first_hint_reveals_vowel_only() {
        let mut s = session("crane");
        let effects = s.use_hint();

        assert_eq!(effects, vec![Effect::HintRevealed(Hint::Vowel(true))]);
        assert_eq!(s.hints_remaining(), 0);
        assert!(s.pending().is_empty());
        assert!(s.use_hint().is_empty());
    }

    #[test]
    fn later_hint_types_next_letter() {
        let mut s = session("crane");
        type_word(&mut s, "cr");
        let effects = s.use_hint();

        assert_eq!(
            effects,
            vec![
                Effect::HintRevealed(Hint::Letter {
                    position: 2,
                    letter: letter('a')
                }),
                Effect::InputChanged {
                    row: 0,
                    letters: vec![letter('c'), letter('r'), letter('a')]
                },
            ]
        );
        assert_eq!(s.hints_remaining(), 0);
    }

    #[test]
    fn hint_after_guess_with_empty_row_reveals_first_letter() {
        let mut s = session("crane");
        let mut o = oracle();
        guess(&mut s, &mut o, "ghost");

        let effects = s.use_hint();
        assert_eq!(
            effects[0],
            Effect::HintRevealed(Hint::Letter {
                position: 0,
                letter: letter('c')
            })
        );
        assert_eq!(s.pending(), &[letter('c')]);
    }

    #[test]
    fn hint_on_full_row_is_kept() {
        let mut s = session("crane");
        type_word(&mut s, "ghost");
        assert!(s.use_hint().is_empty());
        assert_eq!(s.hints_remaining(), 1);
    }

    #[test]
    fn won_implies_last_guess_is_target() {
        let mut s = session("slate");
        let mut o = oracle();
        guess(&mut s, &mut o, "crane");
        guess(&mut s, &mut o, "slate");

        let last = s.guesses().last().unwrap();
        assert!(s.is_won());
        assert_eq!(last.word(), s.target());
        assert_eq!(last.feedback().verdicts(), &[Verdict::Correct; 5]);
    }
}
