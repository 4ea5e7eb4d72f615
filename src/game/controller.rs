//! One player's game plus everything that outlives it
//!
//! `Game` owns the current [`Session`], the word oracle and the statistics. It is
//! the only place that reacts to [`Effect::Finished`], which guarantees each
//! finished session is recorded exactly once.

use super::daily::TargetPicker;
use super::event::{Effect, Event};
use super::session::{Rules, Session};
use super::GameMode;
use crate::dictionary::WordOracle;
use crate::stats::{StatisticsAggregator, StatisticsStore};
use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

pub struct Game<S: StatisticsStore> {
    session: Session,
    oracle: WordOracle,
    stats: StatisticsAggregator<S>,
    picker: TargetPicker,
    rules: Rules,
    today: NaiveDate,
}

impl<S: StatisticsStore> Game<S> {
    /// Start the first game
    ///
    /// The oracle's curated tier is the picker's word bank.
    pub fn start<R: Rng>(
        picker: TargetPicker,
        stats: StatisticsAggregator<S>,
        rules: Rules,
        mode: GameMode,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        let oracle = WordOracle::new(picker.bank().words().iter().copied());
        let session = Self::fresh_session(&picker, rules, mode, today, rng);
        Self {
            session,
            oracle,
            stats,
            picker,
            rules,
            today,
        }
    }

    /// Forward one event to the session, recording statistics if it ends the game
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let effects = self.session.apply(event, &mut self.oracle);
        for effect in &effects {
            if let Effect::Finished { won, attempts, .. } = effect {
                self.stats.record(*won, *attempts);
            }
        }
        effects
    }

    /// Abandon the current session and start another
    ///
    /// An unfinished session is discarded without touching statistics.
    pub fn new_game<R: Rng>(&mut self, mode: GameMode, today: NaiveDate, rng: &mut R) {
        self.today = today;
        self.session = Self::fresh_session(&self.picker, self.rules, mode, today, rng);
    }

    /// Change the hard-mode preference for this and later games
    pub const fn set_hard_mode(&mut self, enabled: bool) {
        self.rules.hard_mode = enabled;
        self.session.set_hard_mode(enabled);
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn oracle(&self) -> &WordOracle {
        &self.oracle
    }

    pub const fn oracle_mut(&mut self) -> &mut WordOracle {
        &mut self.oracle
    }

    #[must_use]
    pub const fn stats(&self) -> &StatisticsAggregator<S> {
        &self.stats
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn picker(&self) -> &TargetPicker {
        &self.picker
    }

    /// Puzzle number of the current session, `None` in practice mode
    #[must_use]
    pub fn puzzle_number(&self) -> Option<i64> {
        match self.session.mode() {
            GameMode::Daily => Some(self.picker.schedule().puzzle_number(self.today)),
            GameMode::Practice => None,
        }
    }

    fn fresh_session<R: Rng>(
        picker: &TargetPicker,
        rules: Rules,
        mode: GameMode,
        today: NaiveDate,
        rng: &mut R,
    ) -> Session {
        let target = picker.pick(mode, today, rng);
        info!(%mode, hard_mode = rules.hard_mode, "New game started");
        Session::new(mode, target, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word};
    use crate::game::DailySchedule;
    use crate::stats::MemoryStore;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn game(rules: Rules) -> Game<MemoryStore> {
        // Day 0 picks index 0: CRANE
        let bank = WordBank::new(words_from_slice(&["crane", "ghost", "light"])).unwrap();
        let picker = TargetPicker::new(bank, DailySchedule::default());
        let stats = StatisticsAggregator::load(MemoryStore::default(), rules.attempts);
        let mut rng = StdRng::seed_from_u64(7);
        Game::start(picker, stats, rules, GameMode::Daily, today(), &mut rng)
    }

    fn play(game: &mut Game<MemoryStore>, text: &str) -> Vec<Effect> {
        for c in text.chars() {
            game.handle(Event::Letter(Letter::new(c).unwrap()));
        }
        game.handle(Event::Submit)
    }

    #[test]
    fn daily_game_uses_schedule() {
        let game = game(Rules::default());
        assert_eq!(game.session().target(), &Word::new("crane").unwrap());
        assert_eq!(game.puzzle_number(), Some(1));
    }

    #[test]
    fn finished_game_is_recorded_once() {
        let mut game = game(Rules::default());
        play(&mut game, "ghost");
        play(&mut game, "crane");

        // Input after the end must not be counted again
        play(&mut game, "light");
        game.handle(Event::Submit);

        let stats = game.stats().stats();
        assert_eq!(stats.played, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.distribution[1], 1);
        assert_eq!(stats.total_attempts, 2);
        assert_eq!(game.stats().store().saves(), 1);
    }

    #[test]
    fn loss_resets_streak() {
        let rules = Rules {
            attempts: 2,
            ..Rules::default()
        };
        let mut game = game(rules);
        play(&mut game, "crane");

        let mut rng = StdRng::seed_from_u64(1);
        game.new_game(GameMode::Daily, today(), &mut rng);
        play(&mut game, "ghost");
        let effects = play(&mut game, "light");

        assert!(matches!(
            effects.last(),
            Some(Effect::Finished { won: false, .. })
        ));
        let stats = game.stats().stats();
        assert_eq!((stats.played, stats.wins, stats.losses), (2, 1, 1));
        assert_eq!(stats.streak, 0);
    }

    #[test]
    fn abandoned_game_is_not_recorded() {
        let mut game = game(Rules::default());
        play(&mut game, "ghost");

        let mut rng = StdRng::seed_from_u64(3);
        game.new_game(GameMode::Practice, today(), &mut rng);

        assert!(game.session().guesses().is_empty());
        assert_eq!(game.puzzle_number(), None);
        assert_eq!(game.stats().stats().played, 0);
    }

    #[test]
    fn hard_mode_preference_carries_over() {
        let mut game = game(Rules::default());
        game.set_hard_mode(true);
        assert!(game.session().hard_mode());

        let mut rng = StdRng::seed_from_u64(3);
        game.new_game(GameMode::Daily, today(), &mut rng);
        assert!(game.session().hard_mode());
    }
}
