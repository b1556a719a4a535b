//! Squared membership check
//!
//! Checks that every element of one sequence appears squared somewhere in a
//! second sequence of the same length.

use crate::domain::HashSet;
use tracing::trace;

/// Square a value without overflow
#[inline]
fn square(v: i32) -> i64 {
    let v = i64::from(v);
    v * v
}

/// Validation short-circuits shared by the checks below
fn comparable(a: &[i32], b: &[i32]) -> bool {
    !a.is_empty() && !b.is_empty() && a.len() == b.len()
}

/// Find the first element of `a` whose square does not occur in `b`
///
/// Membership is by value: a single element of `b` may satisfy any number of
/// elements of `a`. Returns `None` when every square is present (including
/// when `a` is empty).
pub fn first_missing_square(a: &[i32], b: &[i32]) -> Option<i32> {
    let present: HashSet<i64> = b.iter().copied().map(i64::from).collect();

    a.iter().copied().find(|&v| {
        let found = present.contains(&square(v));
        trace!(value = v, square = square(v), found, "square lookup");
        !found
    })
}

/// Check that every element of `a` appears squared in `b`
///
/// Returns false when either sequence is empty or the lengths differ.
/// Squares are computed in 64 bits, so a square beyond `i32::MAX` never
/// matches.
pub fn all_squares_present(a: &[i32], b: &[i32]) -> bool {
    comparable(a, b) && first_missing_square(a, b).is_none()
}

/// Same as [`all_squares_present`], treating an absent sequence as a failure
pub fn all_squares_present_opt(a: Option<&[i32]>, b: Option<&[i32]>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => all_squares_present(a, b),
        _ => false,
    }
}
