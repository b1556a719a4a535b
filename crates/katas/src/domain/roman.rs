//! Roman numeral conversion
//!
//! Greedy subtraction over an explicit (value, symbol) table. Encoding is
//! total for non-negative integers; decoding accepts only the canonical form
//! produced by the encoder.

use crate::constants::{ROMAN_ENCODE_LIMIT, STANDARD_ROMAN_PAIRS};
use thiserror::Error;
use tracing::trace;

/// Roman numeral errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    /// Negative input to the encoder
    #[error("Cannot encode negative value {0} as a Roman numeral")]
    Negative(i64),
    /// Input above the encoder limit
    #[error("Cannot encode {value} as a Roman numeral: limit is {max}")]
    TooLarge { value: i64, max: u64 },
    /// Table rejected by [`RomanTable::new`]
    #[error("Invalid Roman numeral table: {0}")]
    InvalidTable(String),
    /// No table symbol matches at this byte position
    #[error("Invalid Roman numeral symbol '{found}' at position {position}")]
    InvalidSymbol { position: usize, found: char },
    /// Symbols are valid but not in canonical order
    #[error("'{input}' is not a canonical Roman numeral (expected '{canonical}')")]
    NonCanonical { input: String, canonical: String },
    /// Decoded value does not fit in u64
    #[error("Roman numeral '{0}' is too large")]
    Overflow(String),
}

/// Ordered (value, symbol) table used for greedy encoding
///
/// Values are strictly descending and the last entry is normally 1, so that
/// every non-negative integer can be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RomanTable<'a> {
    pairs: &'a [(u64, &'a str)],
}

impl RomanTable<'static> {
    /// Standard table: M, CM, D, CD, C, XC, L, XL, X, IX, V, IV, I
    pub const STANDARD: RomanTable<'static> = RomanTable {
        pairs: &STANDARD_ROMAN_PAIRS,
    };
}

impl<'a> RomanTable<'a> {
    /// Create a table after validating it
    ///
    /// The table must be non-empty, with non-zero values, non-empty symbols and
    /// strictly descending values.
    pub fn new(pairs: &'a [(u64, &'a str)]) -> Result<Self, RomanError> {
        if pairs.is_empty() {
            return Err(RomanError::InvalidTable("table is empty".to_string()));
        }

        for (i, &(value, symbol)) in pairs.iter().enumerate() {
            if value == 0 {
                return Err(RomanError::InvalidTable(format!(
                    "entry {} has value 0",
                    i
                )));
            }
            if symbol.is_empty() {
                return Err(RomanError::InvalidTable(format!(
                    "entry {} has an empty symbol",
                    i
                )));
            }
        }

        if let Some(w) = pairs.windows(2).find(|w| w[0].0 <= w[1].0) {
            return Err(RomanError::InvalidTable(format!(
                "values must be strictly descending ({} before {})",
                w[0].0, w[1].0
            )));
        }

        Ok(Self { pairs })
    }

    /// Table entries in descending value order
    pub fn pairs(&self) -> &'a [(u64, &'a str)] {
        self.pairs
    }

    /// Encode a non-negative integer by greedy subtraction
    ///
    /// 0 encodes to the empty string. Values beyond the conventional range are
    /// encoded mechanically (4000 -> "MMMM" with the standard table) up to
    /// `ROMAN_ENCODE_LIMIT`. If the smallest table value is larger than 1, the
    /// unrepresentable remainder is dropped.
    pub fn encode(&self, n: i64) -> Result<String, RomanError> {
        let mut remaining = u64::try_from(n).map_err(|_| RomanError::Negative(n))?;
        if remaining > ROMAN_ENCODE_LIMIT {
            return Err(RomanError::TooLarge {
                value: n,
                max: ROMAN_ENCODE_LIMIT,
            });
        }

        let mut roman = String::new();

        for &(value, symbol) in self.pairs {
            while remaining >= value {
                remaining -= value;
                roman.push_str(symbol);
            }
        }

        trace!(n, roman = roman.as_str(), "roman encode");
        Ok(roman)
    }

    /// Decode a canonical Roman numeral
    ///
    /// At each position the longest matching table symbol is consumed ("CM"
    /// wins over "C"). The sum is re-encoded and must reproduce the input
    /// exactly. Surrounding whitespace is ignored; the empty string decodes
    /// to 0.
    pub fn decode(&self, input: &str) -> Result<u64, RomanError> {
        let s = input.trim();
        let mut total: u64 = 0;
        let mut pos = 0;

        while pos < s.len() {
            let rest = &s[pos..];
            let (value, symbol) = self
                .longest_match(rest)
                .ok_or_else(|| RomanError::InvalidSymbol {
                    position: pos,
                    found: rest.chars().next().unwrap_or_default(),
                })?;
            total = total
                .checked_add(value)
                .ok_or_else(|| RomanError::Overflow(s.to_string()))?;
            pos += symbol.len();
        }

        let n = i64::try_from(total).map_err(|_| RomanError::Overflow(s.to_string()))?;
        let canonical = self.encode(n)?;
        if canonical != s {
            return Err(RomanError::NonCanonical {
                input: s.to_string(),
                canonical,
            });
        }

        Ok(total)
    }

    /// Longest table symbol that prefixes `rest`
    fn longest_match(&self, rest: &str) -> Option<(u64, &'a str)> {
        self.pairs
            .iter()
            .copied()
            .filter(|&(_, symbol)| rest.starts_with(symbol))
            .max_by_key(|&(_, symbol)| symbol.len())
    }
}

impl Default for RomanTable<'static> {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Encode with the standard table
pub fn to_roman(n: i64) -> Result<String, RomanError> {
    RomanTable::STANDARD.encode(n)
}

/// Decode with the standard table
pub fn from_roman(s: &str) -> Result<u64, RomanError> {
    RomanTable::STANDARD.decode(s)
}
