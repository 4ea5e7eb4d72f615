//! Front-end facade over a [`Game`]
//!
//! Both the TUI and line mode drive the game through a `Player`. It owns the
//! clock and the random source, and keeps background dictionary lookups flowing.

use crate::config::Settings;
use crate::dictionary::LookupWorker;
use crate::game::{
    Clock, Effect, Event, Game, GameMode, KeyboardState, Session, format_countdown,
    time_until_next,
};
use crate::share::share_text;
use crate::stats::StatisticsStore;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct Player<S: StatisticsStore> {
    game: Game<S>,
    worker: Option<LookupWorker>,
    settings: Settings,
    settings_path: PathBuf,
    clock: Box<dyn Clock>,
    rng: StdRng,
}

impl<S: StatisticsStore> Player<S> {
    /// `worker` is `None` when online lookups are disabled
    pub fn new(
        game: Game<S>,
        worker: Option<LookupWorker>,
        settings: Settings,
        settings_path: PathBuf,
        clock: Box<dyn Clock>,
        rng: StdRng,
    ) -> Self {
        Self {
            game,
            worker,
            settings,
            settings_path,
            clock,
            rng,
        }
    }

    /// Apply one event
    ///
    /// Finished lookups are folded in first so the oracle is as fresh as
    /// possible; words the event queued are dispatched afterwards.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        self.sync_lookups();
        let effects = self.game.handle(event);
        if let Some(worker) = &self.worker {
            let started = worker.dispatch(self.game.oracle_mut());
            if started > 0 {
                debug!(started, "Dispatched dictionary lookups");
            }
        }
        effects
    }

    /// Fold finished lookups into the oracle, returning how many arrived
    pub fn sync_lookups(&mut self) -> usize {
        self.worker
            .as_ref()
            .map_or(0, |worker| worker.apply_results(self.game.oracle_mut()))
    }

    /// Discard the current session and start a new one in `mode`
    pub fn new_game(&mut self, mode: GameMode) {
        let today = self.clock.today();
        self.game.new_game(mode, today, &mut self.rng);
    }

    /// Flip hard mode, save the preference and return the new setting
    ///
    /// Flips what the game is actually using, which may come from a one-run
    /// override rather than the saved preference.
    pub fn toggle_hard_mode(&mut self) -> bool {
        let enabled = !self.game.rules().hard_mode;
        self.settings.hard_mode = enabled;
        self.game.set_hard_mode(enabled);

        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!(error = %e, "Could not save hard mode preference");
        }
        enabled
    }

    #[must_use]
    pub const fn game(&self) -> &Game<S> {
        &self.game
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        self.game.session()
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_guesses(self.session().guesses())
    }

    #[must_use]
    pub fn share(&self) -> String {
        share_text(self.session(), self.game.puzzle_number())
    }

    /// Countdown to the next daily puzzle, e.g. `"3h 12m"`
    #[must_use]
    pub fn next_daily(&self) -> String {
        format_countdown(time_until_next(self.clock.now()))
    }
}
