//! The matching core: normalization, per-ingredient satisfaction, ranking.
//!
//! Purely synchronous, side-effect-free computation over in-memory inputs.
//! The only shared state is the static synonym table, which is read-only
//! after initialization and safe for unbounded concurrent access.

pub mod matcher;
pub mod normalize;
pub mod ranker;

pub use matcher::{build_have_set, is_match, similarity, DEFAULT_CUTOFF};
pub use normalize::normalize;
pub use ranker::rank;

use crate::error::{MatchEngineError, Result};

/// Caller-side validation for the fuzzy cutoff.
///
/// The matcher itself assumes a valid value; every entry point (engine,
/// HTTP, CLI) runs this first. Exactly 0 is invalid since it would make
/// any nonzero-similarity pair match.
pub fn validate_cutoff(cutoff: f64) -> Result<f64> {
    if cutoff.is_finite() && cutoff > 0.0 && cutoff <= 1.0 {
        Ok(cutoff)
    } else {
        Err(MatchEngineError::InvalidCutoff(cutoff))
    }
}
