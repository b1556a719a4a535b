//! Exercise related constants
//!
//! Note: the standard Roman numeral table is exposed as `RomanTable::STANDARD`
//! in domain/roman.rs; the raw pairs live here.

// =============================================================================
// Tally input format
// =============================================================================

/// Separator between tally entries
pub const ENTRY_SEPARATOR: char = ',';

/// Separator between a key and its number inside an entry
pub const KEY_SEPARATOR: char = ':';

// =============================================================================
// Roman numerals
// =============================================================================

/// Standard (value, symbol) pairs, strictly descending
pub const STANDARD_ROMAN_PAIRS: [(u64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Smallest value with a conventional Roman representation
pub const ROMAN_MIN: u64 = 1;

/// Largest value with a conventional (non-repeating) Roman representation
///
/// Larger values are still encoded greedily (4000 -> "MMMM").
pub const ROMAN_MAX: u64 = 3999;

/// Largest value the encoder accepts (32-bit signed range)
///
/// Greedy output grows by one "M" per thousand, so this bounds a single
/// encoding to about 2.1 million characters.
pub const ROMAN_ENCODE_LIMIT: u64 = i32::MAX as u64;

// =============================================================================
// Odd frequency diagnostics
// =============================================================================

/// Tracing target for odd frequency diagnostic lines
pub const ODD_FREQUENCY_TARGET: &str = "katas::odd_frequency";
