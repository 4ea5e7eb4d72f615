//! Play statistics across sessions
//!
//! [`Statistics`] is the persisted snapshot, [`StatisticsStore`] is where it lives,
//! and [`StatisticsAggregator`] is the only thing allowed to change it.

mod aggregator;
mod statistics;
mod store;

pub use aggregator::StatisticsAggregator;
pub use statistics::Statistics;
pub use store::{JsonFileStore, MemoryStore, StatisticsStore};
