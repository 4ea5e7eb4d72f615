//! Target selection and the daily puzzle calendar
//!
//! The daily target is a pure function of the local calendar date: the number of
//! days since a fixed epoch, wrapped around the word list. It therefore stays the
//! same all day and changes at local midnight.

use super::GameMode;
use crate::core::Word;
use crate::wordlists::WordBank;
use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;

/// First day of the daily puzzle calendar
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Source of the current local date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Maps calendar days to puzzle numbers and word indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    epoch: NaiveDate,
}

impl DailySchedule {
    #[must_use]
    pub const fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Whole days from the epoch to `today`; negative before the epoch
    #[must_use]
    pub fn day_offset(&self, today: NaiveDate) -> i64 {
        (today - self.epoch).num_days()
    }

    /// Index into a word list of `len` words for `today`
    #[must_use]
    pub fn word_index(&self, today: NaiveDate, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.day_offset(today).rem_euclid(len as i64) as usize
    }

    /// Human-facing puzzle number, 1 on the epoch
    #[must_use]
    pub fn puzzle_number(&self, today: NaiveDate) -> i64 {
        self.day_offset(today) + 1
    }
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

/// Time left until the next local midnight
#[must_use]
pub fn time_until_next(now: NaiveDateTime) -> TimeDelta {
    now.date()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
        .map_or_else(TimeDelta::zero, |midnight| midnight - now)
}

/// Format a countdown as `"{hours}h {minutes}m"`
#[must_use]
pub fn format_countdown(remaining: TimeDelta) -> String {
    let minutes = remaining.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Chooses the target word for a new game
#[derive(Debug, Clone)]
pub struct TargetPicker {
    bank: WordBank,
    schedule: DailySchedule,
}

impl TargetPicker {
    #[must_use]
    pub const fn new(bank: WordBank, schedule: DailySchedule) -> Self {
        Self { bank, schedule }
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn schedule(&self) -> &DailySchedule {
        &self.schedule
    }

    /// The word of the day
    #[must_use]
    pub fn daily(&self, today: NaiveDate) -> Word {
        self.bank.at(self.schedule.word_index(today, self.bank.len()))
    }

    pub fn practice<R: Rng>(&self, rng: &mut R) -> Word {
        self.bank.random(rng)
    }

    pub fn pick<R: Rng>(&self, mode: GameMode, today: NaiveDate, rng: &mut R) -> Word {
        match mode {
            GameMode::Daily => self.daily(today),
            GameMode::Practice => self.practice(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use chrono::NaiveTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker() -> TargetPicker {
        let bank = WordBank::new(words_from_slice(&["crane", "slate", "ghost"])).unwrap();
        TargetPicker::new(bank, DailySchedule::default())
    }

    #[test]
    fn epoch_is_first_puzzle() {
        let schedule = DailySchedule::default();
        assert_eq!(schedule.day_offset(date(2024, 1, 1)), 0);
        assert_eq!(schedule.puzzle_number(date(2024, 1, 1)), 1);
        assert_eq!(schedule.puzzle_number(date(2024, 12, 31)), 366);
    }

    #[test]
    fn word_index_wraps_and_handles_dates_before_epoch() {
        let schedule = DailySchedule::default();
        assert_eq!(schedule.word_index(date(2024, 1, 4), 3), 0);
        assert_eq!(schedule.word_index(date(2024, 1, 5), 3), 1);
        assert_eq!(schedule.word_index(date(2023, 12, 31), 3), 2);
    }

    #[test]
    fn daily_word_is_stable_within_a_day() {
        let picker = picker();
        let day = date(2025, 3, 14);
        let morning = FixedClock(day.and_hms_opt(0, 0, 1).unwrap());
        let night = FixedClock(day.and_hms_opt(23, 59, 59).unwrap());

        assert_eq!(picker.daily(morning.today()), picker.daily(night.today()));

        let tomorrow = day.succ_opt().unwrap();
        assert_ne!(picker.daily(day), picker.daily(tomorrow));
    }

    #[test]
    fn practice_ignores_date() {
        let picker = picker();
        let mut rng = StdRng::seed_from_u64(42);
        let word = picker.pick(GameMode::Practice, date(2024, 1, 1), &mut rng);
        assert!(picker.bank().words().contains(&word));
    }

    #[test]
    fn countdown_to_midnight() {
        let now = date(2024, 6, 1).and_time(NaiveTime::from_hms_opt(21, 15, 30).unwrap());
        let remaining = time_until_next(now);
        assert_eq!(remaining, TimeDelta::seconds(2 * 3600 + 44 * 60 + 30));
        assert_eq!(format_countdown(remaining), "2h 44m");
    }
}
