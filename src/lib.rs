//! Word Guess
//!
//! A Wordle-style word-guessing game: guess a hidden 5-letter word in a fixed
//! number of attempts with per-letter Correct / Present / Absent feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::{Feedback, Verdict, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &answer);
//! assert_eq!(feedback.verdict_at(1), Verdict::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Hard mode constraints
pub mod rules;

// Word validity and dictionary lookups
pub mod dictionary;

// Sessions, targets and the game controller
pub mod game;

// Statistics and their persistence
pub mod stats;

// Word lists
pub mod wordlists;

pub mod config;
pub mod error;
pub mod player;
pub mod share;
pub mod text;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
