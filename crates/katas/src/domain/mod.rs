//! Domain layer - Pure computational logic
//!
//! This module contains the four exercises as pure functions without I/O dependencies.

pub mod odd_frequency;
pub mod roman;
pub mod squares;
pub mod tally;

#[cfg(feature = "fx-hash")]
pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(feature = "fx-hash")]
pub(crate) type HashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type HashSet<T> = std::collections::HashSet<T>;
