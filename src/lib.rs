//! # Recipe Match Engine
//!
//! Pantry-to-recipe matching engine with:
//! - Ingredient normalization (case-fold, singularize, synonym table)
//! - Fuzzy matching with a tunable similarity cutoff
//! - Ranked matched/missing results per recipe
//! - SQLite recipe store
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_match_engine::{MatchEngine, PantryQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = MatchEngine::new("recipes.db").await?;
//!
//!     let report = engine
//!         .match_pantry(PantryQuery::new(vec![
//!             "Eggs".to_string(),
//!             "flour".to_string(),
//!             "butter".to_string(),
//!         ]))
//!         .await?;
//!
//!     for m in &report.results {
//!         println!("{}: {} matched, {} missing", m.name, m.matched_count, m.missing_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod matching;
pub mod store;
pub mod translate;

// Re-export primary types
pub use self::core::{MatchReport, Recipe, RecipeDraft, RecipeMatch};
pub use engine::{MatchEngine, PantryQuery};
pub use error::{MatchEngineError, Result};
pub use matching::{build_have_set, is_match, normalize, rank, validate_cutoff, DEFAULT_CUTOFF};
pub use store::{RecipeStore, SqliteStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
