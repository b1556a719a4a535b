//! Crate level error type
//!
//! Each exercise has its own error enum; `KatasError` wraps them for callers
//! that drive several exercises at once.

use crate::domain::odd_frequency::OddFrequencyError;
use crate::domain::roman::RomanError;
use crate::domain::tally::TallyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KatasError {
    #[error(transparent)]
    Tally(#[from] TallyError),
    #[error(transparent)]
    OddFrequency(#[from] OddFrequencyError),
    #[error(transparent)]
    Roman(#[from] RomanError),
    /// Exercise name not recognised by the showcase
    #[error("Unknown exercise '{0}' (expected one of: tally, squares, odd, roman, all)")]
    UnknownExercise(String),
}

pub type Result<T, E = KatasError> = std::result::Result<T, E>;
