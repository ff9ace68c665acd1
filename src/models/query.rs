use reqwest::Url;

use crate::error::{RequestError, RequestResult};

/// Path of the recommendations endpoint, relative to the service base URL
pub const RECOMMENDATIONS_PATH: &str = "/recommendations";

/// Parameters collected from the page for one recommendations request
///
/// Values are passed through as typed; the service does its own validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub product_id: Option<String>,
    pub num_recommendations: String,
}

impl Query {
    /// Builds a query from raw input values. An empty product id means "no product".
    pub fn from_inputs(product_id: &str, num_recommendations: &str) -> Self {
        Self {
            product_id: (!product_id.is_empty()).then(|| product_id.to_string()),
            num_recommendations: num_recommendations.to_string(),
        }
    }

    /// Full request URL against the given service base URL
    ///
    /// `num_recommendations` is always sent, `product_id` only when present.
    pub fn url(&self, base_url: &str) -> RequestResult<Url> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), RECOMMENDATIONS_PATH);
        let mut url = Url::parse(&endpoint)
            .map_err(|e| RequestError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("num_recommendations", &self.num_recommendations);
            if let Some(product_id) = &self.product_id {
                pairs.append_pair("product_id", product_id);
            }
        }

        Ok(url)
    }

    /// Path and query string of the request, e.g. `/recommendations?num_recommendations=5`
    pub fn path_and_query(&self, base_url: &str) -> RequestResult<String> {
        let url = self.url(base_url)?;
        Ok(match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        })
    }
}
