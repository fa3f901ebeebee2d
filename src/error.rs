use thiserror::Error;

/// Main error type for the match engine
#[derive(Error, Debug)]
pub enum MatchEngineError {
    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown recipe id
    #[error("Recipe not found: {0}")]
    RecipeNotFound(i64),

    /// Recipe name collision on create
    #[error("Recipe '{0}' already exists")]
    DuplicateName(String),

    /// Cutoff outside the valid (0.0, 1.0] range
    #[error("Invalid cutoff {0}: must be a finite number in (0.0, 1.0]")]
    InvalidCutoff(f64),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for MatchEngineError {
    fn from(s: String) -> Self {
        MatchEngineError::Other(s)
    }
}

impl From<&str> for MatchEngineError {
    fn from(s: &str) -> Self {
        MatchEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchEngineError>;
