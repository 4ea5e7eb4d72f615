//! Guess acceptance rules beyond dictionary membership

pub mod hard_mode;

pub use hard_mode::{HardModeViolation, validate};
