//! Composable property-key filters
//!
//! The enumeration operation is one traversal plus a set of independent
//! predicates. Each predicate can be switched off on its own, so filter
//! combinations beyond the default (own + enumerable + skip indices +
//! stringify) need no new traversal logic.

use spyglass_sdk::{PropertyEntry, PropertyKey};

// Largest valid array index is 2^32 - 2; 2^32 - 1 is an ordinary key.
const MAX_ARRAY_INDEX: u64 = u32::MAX as u64 - 1;

/// Predicate set applied to a property-table snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFilter {
    /// Drop entries inherited from the prototype chain
    pub own_only: bool,
    /// Drop non-enumerable entries
    pub enumerable_only: bool,
    /// Drop array-index keys (numeric `Index` keys and index-shaped
    /// string keys alike)
    pub skip_indices: bool,
    /// Coerce symbol keys to their string form; when off, symbol keys
    /// are dropped instead
    pub convert_to_string: bool,
}

impl KeyFilter {
    /// The filter set used by own non-index property enumeration:
    /// all four predicates on.
    pub const fn own_non_index() -> Self {
        Self {
            own_only: true,
            enumerable_only: true,
            skip_indices: true,
            convert_to_string: true,
        }
    }

    /// No filtering at all; every key stringified.
    pub const fn all_keys() -> Self {
        Self {
            own_only: false,
            enumerable_only: false,
            skip_indices: false,
            convert_to_string: true,
        }
    }

    fn admits(&self, entry: &PropertyEntry) -> bool {
        if self.own_only && entry.inherited {
            return false;
        }
        if self.enumerable_only && !entry.enumerable {
            return false;
        }
        if self.skip_indices && is_index_key(&entry.key) {
            return false;
        }
        if !self.convert_to_string && matches!(entry.key, PropertyKey::Symbol { .. }) {
            return false;
        }
        true
    }
}

impl Default for KeyFilter {
    fn default() -> Self {
        Self::own_non_index()
    }
}

/// Apply a filter to a snapshot, preserving entry order.
///
/// Returns the stringified keys of every admitted entry. The snapshot is
/// consumed; the result shares no storage with engine state.
pub fn filter_keys(entries: Vec<PropertyEntry>, filter: &KeyFilter) -> Vec<String> {
    entries
        .into_iter()
        .filter(|e| filter.admits(e))
        .map(|e| e.key.to_key_string())
        .collect()
}

fn is_index_key(key: &PropertyKey) -> bool {
    match key {
        PropertyKey::Index(_) => true,
        PropertyKey::String(s) => is_array_index(s),
        PropertyKey::Symbol { .. } => false,
    }
}

/// Whether a string key is array-index-shaped.
///
/// True exactly for the canonical decimal form of an integer in
/// `0..2^32 - 1`: digits only, no sign, no leading zeros ("0" itself is
/// canonical). "00", "01", "4294967295", and "-1" are ordinary keys.
pub fn is_array_index(key: &str) -> bool {
    if key.is_empty() || key.len() > 10 {
        return false;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if key.len() > 1 && key.starts_with('0') {
        return false;
    }
    match key.parse::<u64>() {
        Ok(n) => n <= MAX_ARRAY_INDEX,
        Err(_) => false,
    }
}
