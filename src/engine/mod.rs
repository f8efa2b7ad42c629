//! The review scoring engine: a deterministic, synchronous pipeline from a
//! restaurant name to a single 0–10 rating.
//!
//! Fetcher → Analyzer → Aggregator, every stage a pure function over
//! immutable inputs. The engine performs no I/O and holds no state between
//! queries; callers may run it concurrently and cache results freely.

pub mod aggregate;
pub mod analyzer;
pub mod fetcher;
pub mod scale;

pub use aggregate::{aggregate, round_for_display};
pub use analyzer::{DimensionScores, analyze};
pub use fetcher::fetch;
pub use scale::{AdjectiveEntry, AdjectiveScale, Dimension, NEUTRAL_SCORE};

use crate::dataset::ReviewCorpus;
use crate::error::EngineError;

/// Full scoring result for one restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRating {
    /// Display name exactly as stored in the corpus.
    pub name: String,
    pub scores: DimensionScores,
    pub overall: f64,
}

/// Run the whole pipeline for one name.
pub fn score_restaurant(
    corpus: &ReviewCorpus,
    scale: &AdjectiveScale,
    name: &str,
) -> Result<RestaurantRating, EngineError> {
    let record = fetch(corpus, name)?;
    let scores = analyze(scale, &record.sentences);
    let overall = aggregate(&scores.food, &scores.service);
    Ok(RestaurantRating {
        name: record.name.clone(),
        scores,
        overall,
    })
}
