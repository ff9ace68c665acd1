/// Recommendation data sources
///
/// The coordinator only depends on [`RecommendationSource`], so the HTTP client
/// can be swapped for a stub or a mock without touching rendering logic.
use crate::{
    error::RequestResult,
    models::{Query, RecommendationResponse},
};

pub mod http;

pub use http::HttpRecommendationClient;

/// Trait for anything that can answer a recommendations query
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Performs one request for the given query
    ///
    /// Exactly one attempt is made. Every failure, whether status, transport or
    /// decoding, comes back as a `RequestError`.
    async fn fetch_recommendations(&self, query: &Query) -> RequestResult<RecommendationResponse>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
