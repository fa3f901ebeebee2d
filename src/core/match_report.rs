use serde::{Deserialize, Serialize};

/// Per-recipe match outcome: the partition of its ingredients into
/// matched vs missing against the have set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeMatch {
    /// Recipe identifier
    pub id: i64,

    /// Recipe name
    pub name: String,

    /// Ingredient tokens satisfied by the have set, in recipe order
    pub matched: Vec<String>,

    /// Ingredient tokens not satisfied, in recipe order
    pub missing: Vec<String>,

    pub matched_count: usize,

    pub missing_count: usize,

    /// True when nothing is missing
    #[serde(rename = "match")]
    pub full_match: bool,
}

impl RecipeMatch {
    /// Build a match result; the counts and full-match flag are derived
    /// from the partition and kept consistent here.
    pub fn new(id: i64, name: impl Into<String>, matched: Vec<String>, missing: Vec<String>) -> Self {
        let matched_count = matched.len();
        let missing_count = missing.len();
        Self {
            id,
            name: name.into(),
            matched,
            missing,
            matched_count,
            missing_count,
            full_match: missing_count == 0,
        }
    }
}

/// Full response for one match request: ranked results plus the
/// interpreted have set. Constructed fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// The normalized have set, sorted, so the caller can display what
    /// was interpreted from free-text input
    pub have: Vec<String>,

    /// Cutoff the matcher ran with
    pub cutoff: f64,

    /// Ranked per-recipe results (zero-match recipes excluded)
    pub results: Vec<RecipeMatch>,

    /// Match latency in milliseconds
    pub latency_ms: f64,
}

impl MatchReport {
    /// Number of full matches in the ranked results
    pub fn full_match_count(&self) -> usize {
        self.results.iter().filter(|m| m.full_match).count()
    }
}
