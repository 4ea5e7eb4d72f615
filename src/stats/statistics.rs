//! Statistics snapshot

use serde::{Deserialize, Serialize};

/// Running totals over every finished game
///
/// Serialized in camelCase so the JSON matches the browser game's saved record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Consecutive wins; any loss resets it to zero
    pub streak: u32,
    /// Wins by number of attempts used; index 0 is a first-try win
    pub distribution: Vec<u32>,
    pub total_attempts: u32,
}

impl Statistics {
    /// Empty statistics with one distribution bucket per allowed attempt
    #[must_use]
    pub fn new(attempts: usize) -> Self {
        Self {
            played: 0,
            wins: 0,
            losses: 0,
            streak: 0,
            distribution: vec![0; attempts],
            total_attempts: 0,
        }
    }

    /// Grow the distribution so it has at least `attempts` buckets
    ///
    /// Snapshots saved under a smaller attempt budget keep their counts.
    pub fn ensure_buckets(&mut self, attempts: usize) {
        if self.distribution.len() < attempts {
            self.distribution.resize(attempts, 0);
        }
    }

    /// Win percentage rounded to the nearest whole number, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        (f64::from(self.wins) / f64::from(self.played) * 100.0).round() as u32
    }

    /// Mean attempts per finished game
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        (self.played > 0).then(|| f64::from(self.total_attempts) / f64::from(self.played))
    }

    /// Largest distribution bucket, at least 1 so it can scale bar charts
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.distribution.iter().copied().max().unwrap_or(0).max(1)
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new(crate::game::DEFAULT_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statistics() {
        let stats = Statistics::new(6);
        assert_eq!(stats.distribution, vec![0; 6]);
        assert_eq!(stats.win_rate(), 0);
        assert_eq!(stats.average_attempts(), None);
        assert_eq!(stats.max_bucket(), 1);
    }

    #[test]
    fn win_rate_rounds() {
        let stats = Statistics {
            played: 3,
            wins: 2,
            ..Statistics::new(6)
        };
        assert_eq!(stats.win_rate(), 67);
    }

    #[test]
    fn json_matches_browser_format() {
        let json = r#"{"played":2,"wins":1,"losses":1,"streak":0,"distribution":[0,0,1,0,0,0],"totalAttempts":9}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_attempts, 9);
        assert_eq!(stats.distribution[2], 1);
        assert_eq!(serde_json::to_string(&stats).unwrap(), json);
    }

    #[test]
    fn ensure_buckets_only_grows() {
        let mut stats = Statistics::new(4);
        stats.distribution[3] = 2;
        stats.ensure_buckets(6);
        assert_eq!(stats.distribution, vec![0, 0, 0, 2, 0, 0]);
        stats.ensure_buckets(3);
        assert_eq!(stats.distribution.len(), 6);
    }
}
