use super::traits::{Tool, ToolFuture, ToolResult};
use crate::engine::{self, AdjectiveScale};
use serde_json::json;
use std::sync::Arc;

/// `analyze_reviews` — review sentences to per-dimension score lists.
pub struct AnalyzeReviewsTool {
    scale: Arc<AdjectiveScale>,
}

impl AnalyzeReviewsTool {
    pub fn new(scale: Arc<AdjectiveScale>) -> Self {
        Self { scale }
    }
}

impl Tool for AnalyzeReviewsTool {
    fn name(&self) -> &str {
        "analyze_reviews"
    }

    fn description(&self) -> &str {
        "Score review sentences 1..5 for food and customer service using the fixed adjective scale."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "review_sentences": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Review sentences for one restaurant"
                }
            },
            "required": ["review_sentences"]
        })
    }

    fn execute(&self, args: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let Some(raw) = args.get("review_sentences").and_then(|v| v.as_array()) else {
                return Ok(ToolResult::fail("Missing 'review_sentences' parameter"));
            };
            let mut sentences = Vec::with_capacity(raw.len());
            for value in raw {
                match value.as_str() {
                    Some(s) => sentences.push(s.to_string()),
                    None => return Ok(ToolResult::fail("'review_sentences' must be strings")),
                }
            }
            if sentences.is_empty() {
                return Ok(ToolResult::fail("No review sentences provided"));
            }

            let scores = engine::analyze(&self.scale, &sentences);
            let payload = json!({
                "food_scores": scores.food,
                "customer_service_scores": scores.service,
            });
            Ok(ToolResult::ok(payload.to_string()))
        })
    }
}
