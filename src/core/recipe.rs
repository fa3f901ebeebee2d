use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored recipe with its raw ingredient and step lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Store-assigned identifier
    pub id: i64,

    /// Recipe name, unique within the store
    pub name: String,

    /// Raw ingredient tokens as entered
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Preparation steps
    #[serde(default)]
    pub steps: Vec<String>,

    /// Timestamp when this recipe was stored
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new Recipe with required fields
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Recipe payload for create/update, before a store id is assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDraft {
    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub steps: Vec<String>,
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Build a draft from newline-separated free text, the way form input
    /// arrives. Blank lines are dropped, entries trimmed.
    pub fn from_text(name: impl Into<String>, ingredients: &str, steps: &str) -> Self {
        Self {
            name: name.into(),
            ingredients: split_lines(ingredients),
            steps: split_lines(steps),
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
