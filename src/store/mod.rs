pub mod sqlite;

use async_trait::async_trait;

use crate::core::{Recipe, RecipeDraft};
use crate::error::Result;

pub use sqlite::SqliteStore;

/// Trait for recipe store implementations
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// List recipes with pagination, ordered by id
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Recipe>>;

    /// Get recipe by id
    async fn get(&self, id: i64) -> Result<Option<Recipe>>;

    /// Get recipe by exact name
    async fn get_by_name(&self, name: &str) -> Result<Option<Recipe>>;

    /// Insert a new recipe; fails with `DuplicateName` if the name exists
    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe>;

    /// Replace name/ingredients/steps of an existing recipe; None if missing
    async fn update(&self, id: i64, draft: &RecipeDraft) -> Result<Option<Recipe>>;

    /// Delete by id; false if the id was not present
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Get store statistics
    async fn stats(&self) -> Result<StoreStats>;
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub total_recipes: u64,
    /// Distinct ingredient names across all recipes
    pub total_ingredients: u64,
    pub oldest_entry: Option<chrono::DateTime<chrono::Utc>>,
    pub newest_entry: Option<chrono::DateTime<chrono::Utc>>,
}
