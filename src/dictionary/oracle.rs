//! Two-tier word validity
//!
//! Tier one is the curated answer list, which is always authoritative. Tier two is
//! a cache of dictionary lookups. A word in neither tier is accepted optimistically
//! and queued so a background lookup can settle it for next time.

use super::lookup::DictionaryLookup;
use crate::core::Word;
use crate::error::LookupError;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

/// What the oracle currently knows about a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// In the curated list
    Curated,
    /// Settled by an earlier dictionary lookup
    Cached(bool),
    /// Never looked up
    Unknown,
}

/// Decides whether a word is an acceptable guess
#[derive(Debug, Default)]
pub struct WordOracle {
    curated: FxHashSet<Word>,
    cache: FxHashMap<Word, bool>,
    pending: Vec<Word>,
    in_flight: FxHashSet<Word>,
}

impl WordOracle {
    /// Create an oracle whose curated tier is `curated`
    pub fn new(curated: impl IntoIterator<Item = Word>) -> Self {
        Self {
            curated: curated.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn check(&self, word: &Word) -> Validity {
        if self.curated.contains(word) {
            Validity::Curated
        } else if let Some(&valid) = self.cache.get(word) {
            Validity::Cached(valid)
        } else {
            Validity::Unknown
        }
    }

    /// Synchronous fast path
    ///
    /// Unknown words are accepted and queued for a background lookup. A lookup
    /// already queued or running is not queued twice.
    pub fn is_valid(&mut self, word: &Word) -> bool {
        match self.check(word) {
            Validity::Curated => true,
            Validity::Cached(valid) => valid,
            Validity::Unknown => {
                if !self.in_flight.contains(word) && !self.pending.contains(word) {
                    debug!(word = %word, "Accepting unknown word provisionally");
                    self.pending.push(*word);
                }
                true
            }
        }
    }

    /// Like [`is_valid`](Self::is_valid) for raw text; anything that is not a
    /// 5-letter word is invalid
    pub fn is_valid_str(&mut self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.is_valid(&word))
    }

    /// Drain the queue of words awaiting a lookup, marking them in flight
    pub fn take_pending(&mut self) -> Vec<Word> {
        let pending = std::mem::take(&mut self.pending);
        self.in_flight.extend(pending.iter().copied());
        pending
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Back-fill the cache with a settled answer
    ///
    /// Curated words are never overridden.
    pub fn resolve(&mut self, word: Word, valid: bool) {
        self.in_flight.remove(&word);
        if !self.curated.contains(&word) {
            self.cache.insert(word, valid);
        }
    }

    /// Fold in the outcome of a dictionary lookup and return the effective answer
    ///
    /// A failed lookup counts as valid but is not cached, so the word will be
    /// looked up again the next time it is seen.
    pub fn record_lookup(&mut self, word: Word, outcome: Result<bool, LookupError>) -> bool {
        match outcome {
            Ok(valid) => {
                debug!(word = %word, valid, "Dictionary lookup resolved");
                self.resolve(word, valid);
                valid
            }
            Err(e) => {
                warn!(word = %word, error = %e, "Dictionary lookup failed, accepting word");
                self.in_flight.remove(&word);
                true
            }
        }
    }

    /// Asynchronous path: consult the dictionary for unknown words and wait
    pub async fn is_valid_async<L>(&mut self, lookup: &L, word: &Word) -> bool
    where
        L: DictionaryLookup + ?Sized,
    {
        match self.check(word) {
            Validity::Curated => true,
            Validity::Cached(valid) => valid,
            Validity::Unknown => {
                let outcome = lookup.check(word).await;
                self.record_lookup(*word, outcome)
            }
        }
    }
}
