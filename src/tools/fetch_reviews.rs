use super::traits::{Tool, ToolFuture, ToolResult};
use crate::dataset::ReviewCorpus;
use crate::engine;
use serde_json::json;
use std::sync::Arc;

/// `fetch_restaurant_data` — restaurant name to stored review sentences.
pub struct FetchRestaurantDataTool {
    corpus: Arc<ReviewCorpus>,
}

impl FetchRestaurantDataTool {
    pub fn new(corpus: Arc<ReviewCorpus>) -> Self {
        Self { corpus }
    }
}

impl Tool for FetchRestaurantDataTool {
    fn name(&self) -> &str {
        "fetch_restaurant_data"
    }

    fn description(&self) -> &str {
        "Fetch the stored review sentences for one restaurant."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "restaurant_name": {
                    "type": "string",
                    "description": "Restaurant name, matched case-insensitively"
                }
            },
            "required": ["restaurant_name"]
        })
    }

    fn execute(&self, args: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let Some(name) = args.get("restaurant_name").and_then(|v| v.as_str()) else {
                return Ok(ToolResult::fail("Missing 'restaurant_name' parameter"));
            };

            match engine::fetch(&self.corpus, name) {
                Ok(record) => {
                    let payload = json!({ record.name.as_str(): record.sentences });
                    Ok(ToolResult::ok(payload.to_string()))
                }
                Err(e) => Ok(ToolResult::fail(e.to_string())),
            }
        })
    }
}
