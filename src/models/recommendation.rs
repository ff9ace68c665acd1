use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a product in the catalogue
///
/// The recommendation service emits integer ids, but ids typed into the page are
/// free text, so both forms are accepted and kept as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawProductId")]
pub struct ProductId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Int(i64),
    Text(String),
}

impl From<RawProductId> for ProductId {
    fn from(raw: RawProductId) -> Self {
        match raw {
            RawProductId::Int(id) => ProductId(id.to_string()),
            RawProductId::Text(id) => ProductId(id),
        }
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single suggested product returned by the recommendation service
///
/// Popularity-based results carry `purchase_count`, content-based results carry
/// `similarity_score`. The two are independent and either may be missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}
