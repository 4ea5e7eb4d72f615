//! Statistics updates at the end of each game

use super::{Statistics, StatisticsStore};
use tracing::{debug, warn};

/// Applies finished games to the statistics and persists every change
///
/// Persistence is best effort: a failed save is logged and the in-memory totals
/// stay correct, so the next successful save writes everything. Statistics that
/// exist but cannot be read are never overwritten; such a run keeps its totals
/// in memory only.
#[derive(Debug)]
pub struct StatisticsAggregator<S: StatisticsStore> {
    stats: Statistics,
    store: S,
    writable: bool,
}

impl<S: StatisticsStore> StatisticsAggregator<S> {
    /// Load existing statistics from `store`, starting fresh if there are none
    /// or they cannot be read
    pub fn load(store: S, attempts: usize) -> Self {
        let (mut stats, writable) = match store.load() {
            Ok(Some(stats)) => (stats, true),
            Ok(None) => (Statistics::new(attempts), true),
            Err(e) => {
                warn!(
                    error = %e,
                    "Could not load statistics, this run's results will not be saved"
                );
                (Statistics::new(attempts), false)
            }
        };
        stats.ensure_buckets(attempts);

        Self {
            stats,
            store,
            writable,
        }
    }

    /// Whether [`record`](Self::record) writes to the store
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Record one finished game
    ///
    /// `attempts_used` is the number of guesses the game took, starting at 1.
    pub fn record(&mut self, won: bool, attempts_used: usize) {
        let stats = &mut self.stats;
        stats.played += 1;

        if won {
            stats.wins += 1;
            stats.streak += 1;
            stats.ensure_buckets(attempts_used);
            if let Some(bucket) = attempts_used
                .checked_sub(1)
                .and_then(|i| stats.distribution.get_mut(i))
            {
                *bucket += 1;
            }
        } else {
            stats.losses += 1;
            stats.streak = 0;
        }
        stats.total_attempts += attempts_used as u32;

        debug!(
            won,
            attempts_used,
            played = stats.played,
            streak = stats.streak,
            "Statistics updated"
        );

        if !self.writable {
            debug!("Statistics kept in memory, the stored copy could not be read");
        } else if let Err(e) = self.store.save(&self.stats) {
            warn!(error = %e, "Could not save statistics");
        }
    }
}
