//! Command implementations

pub mod daily;
pub mod evaluate;
pub mod simple;

pub use daily::daily_info;
pub use evaluate::evaluate_words;
pub use simple::{Flow, LineCommand, LineInput, execute, run_simple};
