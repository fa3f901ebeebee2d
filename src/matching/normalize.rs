//! Ingredient normalization: case-fold, trim, singularize, synonym-map.
//!
//! Normalization is a pure function producing the comparison key used by
//! the matcher. Distinct raw spellings collapse onto one key ("Tomatoes"
//! and "tomato" both normalize to "tomato").

use std::collections::HashMap;
use std::sync::OnceLock;

static SYNONYMS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Variant spelling -> canonical key, consulted after singularization.
/// Read-only after first access.
fn synonyms() -> &'static HashMap<&'static str, &'static str> {
    SYNONYMS.get_or_init(|| {
        HashMap::from([
            ("aubergine", "eggplant"),
            ("eggplants", "eggplant"),
            ("courgette", "zucchini"),
            ("capsicum", "bell pepper"),
            ("scallion", "green onion"),
            ("scallions", "green onion"),
            ("cilantro", "coriander"),
            ("tomatoes", "tomato"),
            ("eggs", "egg"),
        ])
    })
}

/// Suffix-stripping plural heuristic, checked in priority order.
///
/// Not a linguistic analyzer: short or irregular words ending in "s" may
/// mis-singularize ("bus" -> "bu"). That behavior is intentional and kept
/// stable so matching outcomes do not drift.
fn singularize(word: &str) -> String {
    // length gate counts characters, not bytes, so short multibyte words
    // are left alone
    if word.chars().count() > 3 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if let Some(stem) = word.strip_suffix("es") {
            return stem.to_string();
        }
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Canonicalize a raw ingredient token into a comparison key.
///
/// Empty or whitespace-only input returns the empty string; callers treat
/// that as "no ingredient" and exclude it from sets. Never panics for any
/// string input.
pub fn normalize(token: &str) -> String {
    let w = token.trim().to_lowercase();
    if w.is_empty() {
        return w;
    }
    let w = singularize(&w);
    match synonyms().get(w.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => w,
    }
}
