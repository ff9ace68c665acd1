pub mod coordinator;
pub mod providers;
pub mod renderer;

pub use coordinator::{RecommendationCoordinator, RequestOutcome};
pub use providers::{HttpRecommendationClient, RecommendationSource};
