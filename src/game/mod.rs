//! Game sessions, target selection and the controller that ties them to statistics

pub mod controller;
pub mod daily;
pub mod event;
pub mod keyboard;
pub mod session;

pub use controller::Game;
pub use daily::{
    Clock, DEFAULT_EPOCH, DailySchedule, FixedClock, SystemClock, TargetPicker, format_countdown,
    time_until_next,
};
pub use event::{Effect, Event, Hint, Rejection};
pub use keyboard::KeyboardState;
pub use session::{Rules, Session, Status};

use std::fmt;

/// Attempts per game unless configured otherwise
pub const DEFAULT_ATTEMPTS: usize = 6;

/// Hints per game unless configured otherwise
pub const DEFAULT_HINTS: u32 = 1;

/// How the target word is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Same word for everyone on a given local date
    #[default]
    Daily,
    /// Random word, a fresh one every game
    Practice,
}

impl GameMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Daily => Self::Practice,
            Self::Practice => Self::Daily,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Practice => write!(f, "Practice"),
        }
    }
}
