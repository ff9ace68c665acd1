/// HTTP client for the recommendation service
///
/// API Flow:
/// 1. GET {api_url}/recommendations?num_recommendations=N[&product_id=P]
/// 2. 2xx → list of recommendations, or `{ "message": ... }` when nothing applies
/// 3. non-2xx → `{ "error": ... }` when the service could explain the failure
use crate::{
    error::{RequestError, RequestResult},
    models::{ErrorBody, Query, RecommendationResponse},
    request_id::{RequestId, REQUEST_ID_HEADER},
    services::providers::RecommendationSource,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct HttpRecommendationClient {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommendationClient {
    /// Creates a client for the service at `api_url`
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), api_url)
    }

    /// Creates a client reusing an existing reqwest client
    pub fn with_client(http_client: HttpClient, api_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait::async_trait]
impl RecommendationSource for HttpRecommendationClient {
    async fn fetch_recommendations(&self, query: &Query) -> RequestResult<RecommendationResponse> {
        let url = query.url(&self.api_url)?;
        let request_id = RequestId::new();

        tracing::debug!(url = %url, request_id = %request_id, "Requesting recommendations");

        let response = self
            .http_client
            .get(url.clone())
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error);

            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                request_id = %request_id,
                error = message.as_deref().unwrap_or(""),
                "Recommendation service returned an error status"
            );

            return Err(RequestError::Status { status, message });
        }

        let recommendations = RecommendationResponse::from_slice(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                request_id = %request_id,
                response = %String::from_utf8_lossy(&body),
                "Failed to decode recommendation response"
            );
            e
        })?;

        tracing::info!(
            url = %url,
            request_id = %request_id,
            count = recommendations.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_api_url() {
        let client = HttpRecommendationClient::new("http://test.local");
        assert_eq!(client.api_url(), "http://test.local");
        assert_eq!(client.name(), "http");
    }

    #[tokio::test]
    async fn test_invalid_api_url_fails_before_sending() {
        let client = HttpRecommendationClient::new("not a url");
        let err = client
            .fetch_recommendations(&Query::from_inputs("", "5"))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpRecommendationClient::new(format!("http://127.0.0.1:{}", port));
        let err = client
            .fetch_recommendations(&Query::from_inputs("", "5"))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
        assert!(!err.user_message().is_empty());
    }
}
