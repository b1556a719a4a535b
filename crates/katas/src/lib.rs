//! katas - Small algorithmic exercises
//!
//! This crate provides:
//! - Tally aggregation of `key:number` lists
//! - A squared membership check between two integer sequences
//! - Odd frequency detection with deterministic candidate order
//! - Roman numeral encoding (greedy subtraction) and canonical decoding

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::odd_frequency::{
    FrequencyCount, OddFrequency, OddFrequencyError, first_odd_frequency, odd_frequency_partition,
};
pub use domain::roman::{RomanError, RomanTable, from_roman, to_roman};
pub use domain::squares::{all_squares_present, all_squares_present_opt, first_missing_square};
pub use domain::tally::{TallyEntry, TallyError, aggregate, aggregate_entries};
pub use error::{KatasError, Result};
