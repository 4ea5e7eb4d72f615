//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_daily, print_evaluation, print_statistics};
