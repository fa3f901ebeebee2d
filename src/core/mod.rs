pub mod match_report;
pub mod recipe;

pub use match_report::{MatchReport, RecipeMatch};
pub use recipe::{Recipe, RecipeDraft};
