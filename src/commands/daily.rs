//! Today's puzzle number and countdown

use crate::game::{Clock, DailySchedule, time_until_next};
use chrono::TimeDelta;

/// Puzzle number for the clock's date and the time until the next puzzle
#[must_use]
pub fn daily_info(schedule: &DailySchedule, clock: &impl Clock) -> (i64, TimeDelta) {
    let now = clock.now();
    (schedule.puzzle_number(now.date()), time_until_next(now))
}
