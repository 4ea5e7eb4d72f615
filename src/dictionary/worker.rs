//! Background dictionary lookups
//!
//! The game loop stays single-threaded. Lookups run on a tokio runtime and report
//! back over a channel; the loop folds results into the oracle between events.

use super::lookup::DictionaryLookup;
use super::oracle::WordOracle;
use crate::core::Word;
use crate::error::LookupError;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::Handle;
use tracing::debug;

/// Result of one background lookup
#[derive(Debug)]
pub struct LookupOutcome {
    pub word: Word,
    pub result: Result<bool, LookupError>,
}

/// Runs oracle lookups off the input path
pub struct LookupWorker {
    runtime: Handle,
    lookup: Arc<dyn DictionaryLookup>,
    sender: Sender<LookupOutcome>,
    receiver: Receiver<LookupOutcome>,
}

impl LookupWorker {
    #[must_use]
    pub fn new(runtime: Handle, lookup: Arc<dyn DictionaryLookup>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            runtime,
            lookup,
            sender,
            receiver,
        }
    }

    /// Start a lookup for every word the oracle has queued
    ///
    /// Returns the number of lookups started.
    pub fn dispatch(&self, oracle: &mut WordOracle) -> usize {
        let words = oracle.take_pending();
        let count = words.len();

        for word in words {
            let lookup = Arc::clone(&self.lookup);
            let sender = self.sender.clone();
            self.runtime.spawn(async move {
                let result = lookup.check(&word).await;
                if sender.send(LookupOutcome { word, result }).is_err() {
                    debug!(word = %word, "Lookup finished after the game loop exited");
                }
            });
        }

        count
    }

    /// Fold every finished lookup into the oracle without blocking
    ///
    /// Returns the number of results applied.
    pub fn apply_results(&self, oracle: &mut WordOracle) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.receiver.try_recv() {
            oracle.record_lookup(outcome.word, outcome.result);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Validity;
    use async_trait::async_trait;
    use std::time::Duration;

    struct RejectAll;

    #[async_trait]
    impl DictionaryLookup for RejectAll {
        async fn check(&self, _word: &Word) -> Result<bool, LookupError> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(false)
        }
    }

    #[test]
    fn results_arrive_out_of_band() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let worker = LookupWorker::new(runtime.handle().clone(), Arc::new(RejectAll));
        let mut oracle = WordOracle::new([Word::new("crane").unwrap()]);
        let unknown = Word::new("qwxyz").unwrap();

        // Provisionally accepted while the lookup is outstanding
        assert!(oracle.is_valid(&unknown));
        assert_eq!(worker.dispatch(&mut oracle), 1);
        assert_eq!(worker.dispatch(&mut oracle), 0);

        let mut applied = 0;
        for _ in 0..200 {
            applied += worker.apply_results(&mut oracle);
            if applied > 0 {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(applied, 1);
        assert_eq!(oracle.check(&unknown), Validity::Cached(false));
        assert!(!oracle.is_valid(&unknown));
    }
}
