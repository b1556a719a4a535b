//! Odd frequency detection
//!
//! Finds the values of a sequence that occur an odd number of times.
//! Candidates are visited in order of first appearance in the input, which
//! makes the returned value deterministic.

use crate::constants::ODD_FREQUENCY_TARGET;
use crate::domain::HashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Occurrence count of one distinct value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrequencyCount {
    pub value: i32,
    pub count: usize,
}

impl FrequencyCount {
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.count % 2 == 1
    }
}

/// Result of [`first_odd_frequency`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OddFrequency {
    /// First odd-frequency value in order of first appearance
    pub value: i32,
    /// Occurrence count of `value`
    pub count: usize,
    /// Every odd-frequency value, in order of first appearance
    pub candidates: Vec<FrequencyCount>,
    /// One diagnostic line per candidate, same order as `candidates`
    pub diagnostics: Vec<String>,
}

/// Odd frequency errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OddFrequencyError {
    /// No value occurs an odd number of times (includes empty input)
    #[error("No value appears an odd number of times in {input:?}")]
    NotFound { input: Vec<i32> },
}

/// Count occurrences per distinct value, in order of first appearance
pub fn count_frequencies(values: &[i32]) -> Vec<FrequencyCount> {
    let mut counts: Vec<FrequencyCount> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::default();

    for &value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(FrequencyCount { value, count: 1 });
            }
        }
    }

    counts
}

/// Split the distinct values into (odd counts, even counts)
///
/// Both halves keep the order of first appearance.
pub fn odd_frequency_partition(values: &[i32]) -> (Vec<FrequencyCount>, Vec<FrequencyCount>) {
    count_frequencies(values)
        .into_iter()
        .partition(FrequencyCount::is_odd)
}

/// Format the diagnostic line for one odd-frequency candidate
pub fn diagnostic_line(values: &[i32], candidate: &FrequencyCount) -> String {
    format!(
        "{:?} -> El numero {}, aparece de formar impar {} veces.",
        values, candidate.value, candidate.count
    )
}

/// Find the first value that occurs an odd number of times
///
/// 1. Count occurrences per value
/// 2. Drop every value whose count is even, keeping first-appearance order
/// 3. Emit one diagnostic line per surviving candidate and return the first
///
/// Diagnostic lines are emitted as `info` events on the
/// `katas::odd_frequency` target and returned in [`OddFrequency::diagnostics`].
pub fn first_odd_frequency(values: &[i32]) -> Result<OddFrequency, OddFrequencyError> {
    let counts = count_frequencies(values);

    // Counts are already in first-appearance order; drop the even ones
    let candidates: Vec<FrequencyCount> = counts
        .iter()
        .copied()
        .filter(FrequencyCount::is_odd)
        .collect();

    debug!(
        distinct = counts.len(),
        odd = candidates.len(),
        "odd frequency filter"
    );

    let diagnostics: Vec<String> = candidates
        .iter()
        .map(|candidate| {
            let line = diagnostic_line(values, candidate);
            info!(target: ODD_FREQUENCY_TARGET, "{}", line);
            line
        })
        .collect();

    match candidates.first().copied() {
        Some(first) => Ok(OddFrequency {
            value: first.value,
            count: first.count,
            candidates,
            diagnostics,
        }),
        None => Err(OddFrequencyError::NotFound {
            input: values.to_vec(),
        }),
    }
}
