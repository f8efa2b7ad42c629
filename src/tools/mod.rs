pub mod analyze_reviews;
pub mod fetch_reviews;
pub mod overall_score;
pub mod registry;
pub mod traits;

pub use analyze_reviews::AnalyzeReviewsTool;
pub use fetch_reviews::FetchRestaurantDataTool;
pub use overall_score::CalculateOverallScoreTool;
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolFuture, ToolResult, ToolSpec};
