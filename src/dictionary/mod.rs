//! Guess validity: curated list first, external dictionary second
//!
//! The oracle answers synchronously so input never waits on the network. Words it
//! has not seen before are accepted provisionally and queued; the worker looks them
//! up in the background and the results refine later answers.

pub mod lookup;
pub mod oracle;
pub mod worker;

pub use lookup::{DEFAULT_DICTIONARY_URL, DictionaryLookup, HttpDictionary};
pub use oracle::{Validity, WordOracle};
pub use worker::{LookupOutcome, LookupWorker};
