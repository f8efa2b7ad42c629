use super::traits::{Tool, ToolFuture, ToolResult};
use crate::engine::{aggregate, round_for_display};
use serde_json::json;

/// `calculate_overall_score` — parallel score lists to one 0–10 rating.
pub struct CalculateOverallScoreTool {
    decimals: u8,
}

impl CalculateOverallScoreTool {
    pub fn new(decimals: u8) -> Self {
        Self { decimals }
    }
}

fn score_list(args: &serde_json::Value, key: &str) -> Result<Vec<u8>, String> {
    let raw = args
        .get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(|| format!("Missing '{key}' parameter"))?;
    let mut scores = Vec::with_capacity(raw.len());
    for value in raw {
        let score = value
            .as_u64()
            .filter(|s| (1..=5).contains(s))
            .ok_or_else(|| format!("'{key}' entries must be integers in 1..=5"))?;
        #[allow(clippy::cast_possible_truncation)]
        scores.push(score as u8);
    }
    Ok(scores)
}

impl Tool for CalculateOverallScoreTool {
    fn name(&self) -> &str {
        "calculate_overall_score"
    }

    fn description(&self) -> &str {
        "Combine food and customer service score lists into the overall 0..10 rating."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "restaurant_name": {
                    "type": "string",
                    "description": "Restaurant name echoed back as the result key"
                },
                "food_scores": {
                    "type": "array",
                    "items": { "type": "integer", "minimum": 1, "maximum": 5 }
                },
                "customer_service_scores": {
                    "type": "array",
                    "items": { "type": "integer", "minimum": 1, "maximum": 5 }
                }
            },
            "required": ["restaurant_name", "food_scores", "customer_service_scores"]
        })
    }

    fn execute(&self, args: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let Some(name) = args.get("restaurant_name").and_then(|v| v.as_str()) else {
                return Ok(ToolResult::fail("Missing 'restaurant_name' parameter"));
            };
            let food = match score_list(&args, "food_scores") {
                Ok(scores) => scores,
                Err(e) => return Ok(ToolResult::fail(e)),
            };
            let service = match score_list(&args, "customer_service_scores") {
                Ok(scores) => scores,
                Err(e) => return Ok(ToolResult::fail(e)),
            };
            if food.is_empty() || food.len() != service.len() {
                return Ok(ToolResult::fail(
                    "Score lists must be non-empty and of equal length",
                ));
            }

            let score = round_for_display(aggregate(&food, &service), self.decimals);
            Ok(ToolResult::ok(json!({ name: score }).to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn tool() -> CalculateOverallScoreTool {
        CalculateOverallScoreTool::new(3)
    }

    #[tokio::test]
    async fn result_is_keyed_by_restaurant_name() {
        let result = tool()
            .execute(json!({
                "restaurant_name": "Bob's",
                "food_scores": [3],
                "customer_service_scores": [2]
            }))
            .await
            .unwrap();
        assert!(result.success);
        let payload: Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(payload, json!({"Bob's": 3.795}));
    }

    #[tokio::test]
    async fn perfect_scores_reach_ten() {
        let result = tool()
            .execute(json!({
                "restaurant_name": "Paris 6",
                "food_scores": [5, 5],
                "customer_service_scores": [5, 5]
            }))
            .await
            .unwrap();
        let payload: Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(payload, json!({"Paris 6": 10.0}));
    }

    #[tokio::test]
    async fn out_of_range_scores_are_a_failed_result() {
        let result = tool()
            .execute(json!({
                "restaurant_name": "KFC",
                "food_scores": [6],
                "customer_service_scores": [3]
            }))
            .await
            .unwrap();
        assert!(!result.success);
    }

    #[tokio::test]
    async fn mismatched_lists_are_a_failed_result() {
        let result = tool()
            .execute(json!({
                "restaurant_name": "KFC",
                "food_scores": [3, 4],
                "customer_service_scores": [3]
            }))
            .await
            .unwrap();
        assert!(!result.success);
    }
}
