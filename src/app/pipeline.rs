use crate::dataset::ReviewCorpus;
use crate::engine::AdjectiveScale;
use crate::tools::{
    AnalyzeReviewsTool, CalculateOverallScoreTool, FetchRestaurantDataTool, ToolRegistry,
};
use crate::utils::fold;
use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Sequences the three tool operations — fetch, analyze, score — exchanging
/// the same strictly-structured JSON payloads the external contract defines,
/// and formats the final user-facing sentence.
pub struct Pipeline {
    registry: ToolRegistry,
    corpus: Arc<ReviewCorpus>,
    decimals: u8,
}

impl Pipeline {
    #[must_use]
    pub fn new(corpus: Arc<ReviewCorpus>, scale: Arc<AdjectiveScale>, decimals: u8) -> Self {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(FetchRestaurantDataTool::new(Arc::clone(&corpus))));
        registry.register(Box::new(AnalyzeReviewsTool::new(scale)));
        registry.register(Box::new(CalculateOverallScoreTool::new(decimals)));
        Self {
            registry,
            corpus,
            decimals,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Answer a free-text question by extracting a known restaurant name
    /// from it, then rating that restaurant.
    pub async fn answer(&self, question: &str) -> Result<String> {
        match self.extract_name(question) {
            Some(name) => self.rate(&name).await,
            None => {
                info!(question, "no known restaurant name in question");
                Ok("No reviews were found for that restaurant.".to_string())
            }
        }
    }

    /// Rate one restaurant by name, driving the three tools in sequence.
    pub async fn rate(&self, name: &str) -> Result<String> {
        // 1) fetch_restaurant_data
        let fetched = self
            .registry
            .execute("fetch_restaurant_data", json!({ "restaurant_name": name }))
            .await?;
        if !fetched.success {
            debug!(name, error = ?fetched.error, "fetch produced no reviews");
            return Ok(format!("No reviews were found for {name}."));
        }
        let payload: Value = serde_json::from_str(&fetched.output)
            .context("fetch_restaurant_data returned invalid JSON")?;
        let Some((stored_name, sentences)) =
            payload.as_object().and_then(|map| map.iter().next())
        else {
            bail!("fetch_restaurant_data returned an empty payload");
        };
        let stored_name = stored_name.clone();

        // 2) analyze_reviews
        let analyzed = self
            .registry
            .execute("analyze_reviews", json!({ "review_sentences": sentences }))
            .await?;
        if !analyzed.success {
            bail!(
                "analyze_reviews failed: {}",
                analyzed.error.unwrap_or_default()
            );
        }
        let scores: Value = serde_json::from_str(&analyzed.output)
            .context("analyze_reviews returned invalid JSON")?;

        // 3) calculate_overall_score
        let scored = self
            .registry
            .execute(
                "calculate_overall_score",
                json!({
                    "restaurant_name": stored_name,
                    "food_scores": scores["food_scores"],
                    "customer_service_scores": scores["customer_service_scores"],
                }),
            )
            .await?;
        if !scored.success {
            bail!(
                "calculate_overall_score failed: {}",
                scored.error.unwrap_or_default()
            );
        }
        let payload: Value = serde_json::from_str(&scored.output)
            .context("calculate_overall_score returned invalid JSON")?;
        let Some((final_name, score)) = payload.as_object().and_then(|map| map.iter().next())
        else {
            bail!("calculate_overall_score returned an empty payload");
        };
        let score = score
            .as_f64()
            .context("calculate_overall_score returned a non-numeric score")?;

        info!(name = %final_name, score, "rated restaurant");
        Ok(format!(
            "The average rating of {final_name} is {score:.prec$}.",
            prec = usize::from(self.decimals)
        ))
    }

    /// Deterministic stand-in for upstream name extraction: find a stored
    /// restaurant name inside the question, folded on both sides, preferring
    /// the longest name so "China in Box" beats a hypothetical "China".
    fn extract_name(&self, question: &str) -> Option<String> {
        let folded_question = fold(question);
        let mut names: Vec<&str> = self.corpus.names().collect();
        names.sort_by_key(|n| std::cmp::Reverse(n.len()));
        names
            .into_iter()
            .find(|name| folded_question.contains(&fold(name)))
            .map(ToString::to_string)
    }
}
