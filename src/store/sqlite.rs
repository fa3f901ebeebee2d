use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::core::{Recipe, RecipeDraft};
use crate::error::{MatchEngineError, Result};
use crate::store::{RecipeStore, StoreStats};

/// SQLite-based recipe store implementation
///
/// Schema:
/// ```sql
/// CREATE TABLE recipes (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL UNIQUE,
///     ingredients TEXT,
///     steps TEXT,
///     created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
/// Ingredient and step lists are JSON-encoded in TEXT columns.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a store at `db_path`; `:memory:` works for tests
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(MatchEngineError::Database)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                ingredients TEXT,
                steps TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at)",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn row_to_recipe(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let ingredients_json: Option<String> = row.get(2)?;
    let steps_json: Option<String> = row.get(3)?;

    let ingredients: Vec<String> = match ingredients_json {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
        None => Vec::new(),
    };
    let steps: Vec<String> = match steps_json {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
        None => Vec::new(),
    };

    // Stored as RFC 3339 TEXT; tolerate anything else by falling back to now
    let created_at: DateTime<Utc> = row
        .get::<_, String>(4)
        .ok()
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    Ok(Recipe {
        id: row.get(0)?,
        name: row.get(1)?,
        ingredients,
        steps,
        created_at,
    })
}

#[async_trait]
impl RecipeStore for SqliteStore {
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Recipe>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, name, ingredients, steps, created_at
             FROM recipes
             ORDER BY id
             LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![limit as i64, skip as i64], row_to_recipe)?;
        let mut recipes = Vec::new();
        for row in rows {
            recipes.push(row?);
        }
        Ok(recipes)
    }

    async fn get(&self, id: i64) -> Result<Option<Recipe>> {
        let conn = self.conn.lock().unwrap();

        let recipe = conn
            .query_row(
                "SELECT id, name, ingredients, steps, created_at FROM recipes WHERE id = ?1",
                params![id],
                row_to_recipe,
            )
            .optional()?;

        Ok(recipe)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Recipe>> {
        let conn = self.conn.lock().unwrap();

        let recipe = conn
            .query_row(
                "SELECT id, name, ingredients, steps, created_at FROM recipes WHERE name = ?1",
                params![name],
                row_to_recipe,
            )
            .optional()?;

        Ok(recipe)
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe> {
        let conn = self.conn.lock().unwrap();

        let exists: Option<i64> = conn
            .query_row(
                "SELECT id FROM recipes WHERE name = ?1",
                params![draft.name],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_some() {
            return Err(MatchEngineError::DuplicateName(draft.name.clone()));
        }

        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO recipes (name, ingredients, steps, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.name,
                serde_json::to_string(&draft.ingredients)?,
                serde_json::to_string(&draft.steps)?,
                created_at.to_rfc3339(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(Recipe {
            id,
            name: draft.name.clone(),
            ingredients: draft.ingredients.clone(),
            steps: draft.steps.clone(),
            created_at,
        })
    }

    async fn update(&self, id: i64, draft: &RecipeDraft) -> Result<Option<Recipe>> {
        let conn = self.conn.lock().unwrap();

        // renaming onto another recipe's name would violate UNIQUE
        let taken: Option<i64> = conn
            .query_row(
                "SELECT id FROM recipes WHERE name = ?1 AND id != ?2",
                params![draft.name, id],
                |row| row.get(0),
            )
            .optional()?;
        if taken.is_some() {
            return Err(MatchEngineError::DuplicateName(draft.name.clone()));
        }

        let changed = conn.execute(
            "UPDATE recipes SET name = ?1, ingredients = ?2, steps = ?3 WHERE id = ?4",
            params![
                draft.name,
                serde_json::to_string(&draft.ingredients)?,
                serde_json::to_string(&draft.steps)?,
                id,
            ],
        )?;
        if changed == 0 {
            return Ok(None);
        }

        let recipe = conn
            .query_row(
                "SELECT id, name, ingredients, steps, created_at FROM recipes WHERE id = ?1",
                params![id],
                row_to_recipe,
            )
            .optional()?;
        Ok(recipe)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();

        let deleted = conn.execute("DELETE FROM recipes WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    async fn stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock().unwrap();

        let total_recipes: u64 =
            conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;

        // distinct ingredient names need the JSON decoded, so scan in Rust
        let mut stmt = conn.prepare("SELECT ingredients FROM recipes")?;
        let mut distinct_ingredients = std::collections::HashSet::new();
        let rows = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;
        for row in rows {
            if let Some(json) = row? {
                let list: Vec<String> = serde_json::from_str(&json)?;
                distinct_ingredients.extend(list);
            }
        }
        let total_ingredients = distinct_ingredients.len() as u64;

        let oldest_entry: Option<DateTime<Utc>> = conn
            .query_row("SELECT MIN(created_at) FROM recipes", [], |row| {
                row.get::<_, Option<String>>(0)
            })?
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let newest_entry: Option<DateTime<Utc>> = conn
            .query_row("SELECT MAX(created_at) FROM recipes", [], |row| {
                row.get::<_, Option<String>>(0)
            })?
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(StoreStats {
            total_recipes,
            total_ingredients,
            oldest_entry,
            newest_entry,
        })
    }
}
