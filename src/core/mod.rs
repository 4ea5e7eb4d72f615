//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and cheap to copy.

mod feedback;
mod guess;
mod word;

pub use feedback::{Feedback, Verdict};
pub use guess::Guess;
pub use word::{Letter, WORD_LENGTH, Word, WordError};
