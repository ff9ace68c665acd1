use serde::Deserialize;
use serde_json::Value;

use crate::error::{RequestError, RequestResult};

pub mod query;
pub mod recommendation;

pub use query::{Query, RECOMMENDATIONS_PATH};
pub use recommendation::{ProductId, Recommendation};

// ============================================================================
// Recommendation Service Response Types
// ============================================================================

/// Successful response of the recommendations endpoint
///
/// The service answers either with a list of recommendations or with an object
/// carrying a `message` when nothing applies. The shape is resolved once, here,
/// rather than at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationResponse {
    /// The service returned an empty list
    Empty,
    /// The service explained why there is nothing to show
    Informational(String),
    /// One or more recommendations, in service order
    Results(Vec<Recommendation>),
}

impl RecommendationResponse {
    /// Decodes a raw response body
    pub fn from_slice(body: &[u8]) -> RequestResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_json(value)
    }

    /// Resolves a decoded JSON body into one of the three response variants
    ///
    /// An object with a non-empty `message` is informational whatever else it
    /// carries. Any other object or scalar is a decoding failure.
    pub fn from_json(value: Value) -> RequestResult<Self> {
        match value {
            Value::Object(map) => match map.get("message") {
                Some(Value::String(message)) if !message.is_empty() => {
                    Ok(RecommendationResponse::Informational(message.clone()))
                }
                _ => Err(RequestError::Decode(
                    "response object has no message".to_string(),
                )),
            },
            Value::Array(items) if items.is_empty() => Ok(RecommendationResponse::Empty),
            Value::Array(items) => {
                let recommendations = items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<Vec<Recommendation>, _>>()?;
                Ok(RecommendationResponse::Results(recommendations))
            }
            other => Err(RequestError::Decode(format!(
                "expected a list or an object, got {}",
                other
            ))),
        }
    }

    /// Number of recommendations carried
    pub fn len(&self) -> usize {
        match self {
            RecommendationResponse::Results(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_object_is_informational() {
        let body = json!({
            "message": "No recommendations available based on current data or context. Try a different request."
        });
        let response = RecommendationResponse::from_json(body).unwrap();
        assert_eq!(
            response,
            RecommendationResponse::Informational(
                "No recommendations available based on current data or context. Try a different request."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_message_wins_over_other_fields() {
        let body = json!({
            "message": "Nothing to suggest",
            "items": [{ "product_id": 1, "name": "x", "category": "y" }]
        });
        let response = RecommendationResponse::from_json(body).unwrap();
        assert_eq!(
            response,
            RecommendationResponse::Informational("Nothing to suggest".to_string())
        );
    }

    #[test]
    fn test_empty_list() {
        let response = RecommendationResponse::from_slice(b"[]").unwrap();
        assert_eq!(response, RecommendationResponse::Empty);
        assert!(response.is_empty());
    }

    #[test]
    fn test_results_keep_service_order() {
        let body = json!([
            { "product_id": 108, "name": "Diet Cola (2L)", "category": "Beverages", "purchase_count": 31 },
            { "product_id": 101, "name": "Fresh Milk (1L)", "category": "Dairy & Eggs", "purchase_count": 27 },
            { "product_id": 108, "name": "Diet Cola (2L)", "category": "Beverages", "purchase_count": 31 }
        ]);
        let response = RecommendationResponse::from_json(body).unwrap();
        let RecommendationResponse::Results(items) = response else {
            panic!("expected results");
        };
        let ids: Vec<String> = items.iter().map(|r| r.product_id.to_string()).collect();
        assert_eq!(ids, vec!["108", "101", "108"]);
    }

    #[test]
    fn test_object_without_message_is_decode_error() {
        let err = RecommendationResponse::from_json(json!({ "status": "ok" })).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));

        let err = RecommendationResponse::from_json(json!({ "message": "" })).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = RecommendationResponse::from_slice(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));

        let err = RecommendationResponse::from_json(json!(42)).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[test]
    fn test_malformed_element_is_decode_error() {
        let err = RecommendationResponse::from_json(json!([{ "name": "no id" }])).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[test]
    fn test_error_body() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "num_recommendations must be a positive integer."}"#)
                .unwrap();
        assert_eq!(
            body.error.as_deref(),
            Some("num_recommendations must be a positive integer.")
        );

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
    }
}
