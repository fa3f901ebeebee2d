//! Aggregates per-ingredient match decisions into ranked per-recipe results.

use std::collections::BTreeSet;

use crate::core::{Recipe, RecipeMatch};
use crate::matching::matcher::is_match;

/// Partition each recipe's ingredients into matched/missing against the
/// have set, drop recipes with zero matches, and sort the rest.
///
/// Sort order: higher matched count first, then fewer missing, then recipe
/// name (lexicographic, case-sensitive as stored) as the deterministic
/// tie-break. Recipes closest to complete bubble to the top.
pub fn rank(have: &BTreeSet<String>, recipes: &[Recipe], cutoff: f64) -> Vec<RecipeMatch> {
    let mut results: Vec<RecipeMatch> = recipes
        .iter()
        .filter_map(|recipe| {
            let mut matched = Vec::new();
            let mut missing = Vec::new();
            for ingredient in &recipe.ingredients {
                if is_match(ingredient, have, cutoff) {
                    matched.push(ingredient.clone());
                } else {
                    missing.push(ingredient.clone());
                }
            }
            if matched.is_empty() {
                // no overlap with the pantry, irrelevant to the query
                return None;
            }
            Some(RecipeMatch::new(recipe.id, recipe.name.clone(), matched, missing))
        })
        .collect();

    results.sort_by(|a, b| {
        b.matched_count
            .cmp(&a.matched_count)
            .then(a.missing_count.cmp(&b.missing_count))
            .then_with(|| a.name.cmp(&b.name))
    });

    results
}
