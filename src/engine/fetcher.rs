use crate::dataset::{RestaurantRecord, ReviewCorpus};
use crate::error::EngineError;

/// Locate a restaurant's record by name.
///
/// Matching is case- and accent-insensitive but exact — fuzzy name
/// resolution belongs upstream. `RestaurantNotFound` and `NoReviews` are
/// both terminal for the pipeline: the caller surfaces a not-found outcome
/// instead of fabricating a score.
pub fn fetch<'a>(corpus: &'a ReviewCorpus, name: &str) -> Result<&'a RestaurantRecord, EngineError> {
    let record = corpus
        .lookup(name)
        .ok_or_else(|| EngineError::RestaurantNotFound {
            name: name.to_string(),
        })?;
    if record.sentences.is_empty() {
        return Err(EngineError::NoReviews {
            name: record.name.clone(),
        });
    }
    Ok(record)
}
