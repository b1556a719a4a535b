//! Tally aggregation
//!
//! Parses a comma separated list of `key:number` entries and sums the
//! numbers per key, keeping keys in the order they were first seen.

use crate::constants::{ENTRY_SEPARATOR, KEY_SEPARATOR};
use crate::domain::HashMap;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;
use tracing::{debug, trace};

/// Running total for one key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TallyEntry {
    /// Key as written in the input (trimmed)
    pub key: String,
    /// Sum of every number seen for the key
    pub total: i64,
}

impl TallyEntry {
    pub fn new(key: impl Into<String>, total: i64) -> Self {
        Self {
            key: key.into(),
            total,
        }
    }
}

impl fmt::Display for TallyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, KEY_SEPARATOR, self.total)
    }
}

/// Tally parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    /// Empty segment between two separators (1-based position)
    #[error("Empty entry at position {position}")]
    EmptyEntry { position: usize },
    /// Entry without a key separator
    #[error("Malformed entry '{entry}': expected 'key:number'")]
    MissingSeparator { entry: String },
    /// Nothing before the key separator
    #[error("Malformed entry '{entry}': key is empty")]
    EmptyKey { entry: String },
    /// Number part is not an integer
    #[error("Invalid number '{value}' for key '{key}': {source}")]
    InvalidNumber {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// Running total no longer fits in i64
    #[error("Total for key '{key}' overflows a 64-bit integer")]
    Overflow { key: String },
}

/// Parse a single trimmed entry into its key and number
fn parse_entry(entry: &str) -> Result<(&str, i64), TallyError> {
    let (key, value) =
        entry
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| TallyError::MissingSeparator {
                entry: entry.to_string(),
            })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(TallyError::EmptyKey {
            entry: entry.to_string(),
        });
    }

    let value = value.trim();
    let number = value
        .parse::<i64>()
        .map_err(|source| TallyError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })?;

    Ok((key, number))
}

/// Sum the numbers of every `key:number` entry per key
///
/// Entries are separated by commas and trimmed before parsing; the key and
/// the number are split on the first colon. Keys are returned in first-seen
/// order. Empty (or whitespace-only) input yields an empty result.
pub fn aggregate_entries(input: &str) -> Result<Vec<TallyEntry>, TallyError> {
    if input.trim().is_empty() {
        debug!("empty tally input");
        return Ok(Vec::new());
    }

    let mut entries: Vec<TallyEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::default();

    for (i, raw) in input.split(ENTRY_SEPARATOR).enumerate() {
        let entry = raw.trim();
        if entry.is_empty() {
            return Err(TallyError::EmptyEntry { position: i + 1 });
        }

        let (key, number) = parse_entry(entry)?;
        trace!(key, number, "tally entry");

        match index.get(key) {
            Some(&slot) => {
                let tally = &mut entries[slot];
                tally.total = tally
                    .total
                    .checked_add(number)
                    .ok_or_else(|| TallyError::Overflow {
                        key: key.to_string(),
                    })?;
            }
            None => {
                index.insert(key, entries.len());
                entries.push(TallyEntry::new(key, number));
            }
        }
    }

    debug!(keys = entries.len(), "tally aggregated");
    Ok(entries)
}

/// Sum per key and format each result as `key:total`
pub fn aggregate(input: &str) -> Result<Vec<String>, TallyError> {
    Ok(aggregate_entries(input)?
        .iter()
        .map(TallyEntry::to_string)
        .collect())
}
