//! Per-ingredient satisfaction check: exact containment first, fuzzy
//! similarity fallback against the normalized have set.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

use crate::matching::normalize::normalize;

/// Default similarity cutoff for fuzzy matches.
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Build the normalized have set from raw pantry entries.
///
/// Entries that normalize to the empty key are discarded. The BTreeSet
/// doubles as the sorted order reported back to the caller.
pub fn build_have_set<I, S>(entries: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|e| normalize(e.as_ref()))
        .filter(|key| !key.is_empty())
        .collect()
}

/// Sequence-similarity ratio between two keys.
///
/// Indel-normalized similarity: symmetric, range [0, 1], 1.0 for identical
/// strings. Equivalent to the matching-block ratio 2*LCS / (|a| + |b|).
pub fn similarity(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars())
}

/// Decide whether `recipe_ingredient` is satisfied by the have set.
///
/// Exact containment of the normalized key always wins, regardless of
/// cutoff. Otherwise the best similarity against the have set must reach
/// `cutoff`. Assumes `cutoff` was validated by the caller (see
/// [`crate::matching::validate_cutoff`]).
pub fn is_match(recipe_ingredient: &str, have: &BTreeSet<String>, cutoff: f64) -> bool {
    let key = normalize(recipe_ingredient);
    if key.is_empty() {
        // an unnamed ingredient can never be satisfied
        return false;
    }
    if have.contains(&key) {
        return true;
    }
    if have.is_empty() {
        return false;
    }
    let best = have
        .iter()
        .map(|candidate| similarity(&key, candidate))
        .fold(0.0_f64, f64::max);
    best >= cutoff
}
