use super::scale::{AdjectiveScale, Dimension, NEUTRAL_SCORE};
use crate::utils::{fold, tokenize};
use serde::{Deserialize, Serialize};

/// Index-aligned per-sentence scores for both dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub food: Vec<u8>,
    pub service: Vec<u8>,
}

impl DimensionScores {
    #[must_use]
    pub fn len(&self) -> usize {
        self.food.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.food.is_empty()
    }
}

/// Score every sentence on both dimensions.
///
/// Pure function of its input and the fixed scale. Per sentence and per
/// dimension, tokens are scanned left to right and the first vocabulary
/// match wins; at each position longer phrases are probed before single
/// words so multi-word entries ("sem graca") are not shadowed by their own
/// leading token. A sentence with no match gets the neutral fallback — the
/// output vectors always have one entry per input sentence.
#[must_use]
pub fn analyze<S: AsRef<str>>(scale: &AdjectiveScale, sentences: &[S]) -> DimensionScores {
    let mut food = Vec::with_capacity(sentences.len());
    let mut service = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let folded = fold(sentence.as_ref());
        let tokens = tokenize(&folded);
        food.push(score_sentence(scale, &tokens, Dimension::Food));
        service.push(score_sentence(scale, &tokens, Dimension::Service));
    }

    debug_assert_eq!(food.len(), service.len());
    DimensionScores { food, service }
}

fn score_sentence(scale: &AdjectiveScale, tokens: &[&str], dimension: Dimension) -> u8 {
    let window = scale.max_phrase_words();
    for start in 0..tokens.len() {
        let widest = window.min(tokens.len() - start);
        for width in (1..=widest).rev() {
            let phrase = tokens[start..start + width].join(" ");
            if let Some(score) = scale.lookup_folded(&phrase, dimension) {
                return score;
            }
        }
    }
    NEUTRAL_SCORE
}
