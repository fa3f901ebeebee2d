use std::sync::Arc;
use std::time::Instant;

use crate::core::{MatchReport, Recipe, RecipeDraft};
use crate::error::{MatchEngineError, Result};
use crate::matching::{build_have_set, rank, validate_cutoff, DEFAULT_CUTOFF};
use crate::store::{RecipeStore, SqliteStore, StoreStats};

/// Page size used when loading the full candidate set from the store.
const LIST_PAGE_SIZE: usize = 100;

/// Main pantry-to-recipe match orchestrator
pub struct MatchEngine {
    store: Arc<dyn RecipeStore>,
}

/// One match request: raw pantry entries plus the fuzzy cutoff
#[derive(Debug, Clone)]
pub struct PantryQuery {
    pub have: Vec<String>,
    pub cutoff: f64,
}

impl PantryQuery {
    pub fn new(have: Vec<String>) -> Self {
        Self {
            have,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }
}

impl MatchEngine {
    /// Create new engine backed by a SQLite store at `db_path`
    pub async fn new(db_path: impl AsRef<str>) -> Result<Self> {
        let store = Arc::new(SqliteStore::new(db_path.as_ref()).await?);
        Ok(Self { store })
    }

    /// Create an engine over an existing store
    pub fn with_store(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Match the user's pantry against every stored recipe.
    ///
    /// Validates the cutoff, normalizes the pantry once into a have set,
    /// then ranks all recipes. Zero-match recipes are excluded from the
    /// report.
    pub async fn match_pantry(&self, query: PantryQuery) -> Result<MatchReport> {
        let cutoff = validate_cutoff(query.cutoff)?;
        let start = Instant::now();

        let have = build_have_set(&query.have);
        tracing::debug!(
            "Pantry of {} entries normalized to {} keys",
            query.have.len(),
            have.len()
        );

        let recipes = self.all_recipes().await?;
        let results = rank(&have, &recipes, cutoff);

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            "Matched {}/{} recipes in {:.2}ms",
            results.len(),
            recipes.len(),
            latency_ms
        );

        Ok(MatchReport {
            have: have.into_iter().collect(),
            cutoff,
            results,
            latency_ms,
        })
    }

    async fn all_recipes(&self) -> Result<Vec<Recipe>> {
        let mut recipes = Vec::new();
        let mut skip = 0;
        loop {
            let page = self.store.list(skip, LIST_PAGE_SIZE).await?;
            let count = page.len();
            recipes.extend(page);
            if count < LIST_PAGE_SIZE {
                break;
            }
            skip += count;
        }
        Ok(recipes)
    }

    /// Add a recipe to the store
    pub async fn add_recipe(&self, draft: &RecipeDraft) -> Result<Recipe> {
        self.store.create(draft).await
    }

    /// Get a recipe by id, failing with `RecipeNotFound` if absent
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe> {
        self.store
            .get(id)
            .await?
            .ok_or(MatchEngineError::RecipeNotFound(id))
    }

    /// Get a recipe by name if present
    pub async fn get_recipe_by_name(&self, name: &str) -> Result<Option<Recipe>> {
        self.store.get_by_name(name).await
    }

    /// List recipes with pagination
    pub async fn list_recipes(&self, skip: usize, limit: usize) -> Result<Vec<Recipe>> {
        self.store.list(skip, limit).await
    }

    /// Update a recipe, failing with `RecipeNotFound` if absent
    pub async fn update_recipe(&self, id: i64, draft: &RecipeDraft) -> Result<Recipe> {
        self.store
            .update(id, draft)
            .await?
            .ok_or(MatchEngineError::RecipeNotFound(id))
    }

    /// Delete a recipe, failing with `RecipeNotFound` if absent
    pub async fn delete_recipe(&self, id: i64) -> Result<()> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(MatchEngineError::RecipeNotFound(id))
        }
    }

    /// Get store statistics
    pub async fn store_stats(&self) -> Result<StoreStats> {
        self.store.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_engine_creation() {
        let result = MatchEngine::new(":memory:").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_match_pantry_validates_cutoff() {
        let engine = MatchEngine::new(":memory:").await.unwrap();

        let err = engine
            .match_pantry(PantryQuery::new(vec!["egg".to_string()]).with_cutoff(0.0))
            .await;
        assert!(matches!(err, Err(MatchEngineError::InvalidCutoff(_))));
    }

    #[tokio::test]
    async fn test_match_pantry_empty_store() {
        let engine = MatchEngine::new(":memory:").await.unwrap();

        let report = engine
            .match_pantry(PantryQuery::new(vec!["egg".to_string()]))
            .await
            .unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.have, vec!["egg"]);
    }

    #[tokio::test]
    async fn test_get_missing_recipe_is_not_found() {
        let engine = MatchEngine::new(":memory:").await.unwrap();

        let err = engine.get_recipe(42).await;
        assert!(matches!(err, Err(MatchEngineError::RecipeNotFound(42))));
    }
}
