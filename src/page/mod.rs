//! Output regions and inputs of the recommendations page
//!
//! The coordinator never looks elements up by name. It is handed a [`Page`]
//! exposing exactly the two inputs it reads and the two regions it writes, which
//! keeps the rendering boundary swappable (browser bridge, terminal, tests).

use crate::models::Recommendation;

pub mod html;
pub mod memory;
pub mod text;

pub use memory::MemoryPage;

/// Instructional text shown before any request and after a reset
pub const PLACEHOLDER_TEXT: &str =
    "Enter a Product ID or click \"Get Recommendations\" for general popular items.";

/// Shown while a request is in flight
pub const LOADING_TEXT: &str = "Loading recommendations...";

/// Shown when the service returns an empty list
pub const NO_RESULTS_TEXT: &str = "No recommendations found for your request.";

/// Content of the recommendations list region
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListContent {
    /// Fixed instructional placeholder
    #[default]
    Placeholder,
    /// Loading placeholder
    Loading,
    /// A single informational line
    Message(String),
    /// One card per recommendation, in order
    Cards(Vec<Recommendation>),
    /// Nothing at all
    Cleared,
}

impl ListContent {
    /// Number of recommendation cards in the region
    pub fn card_count(&self) -> usize {
        match self {
            ListContent::Cards(cards) => cards.len(),
            _ => 0,
        }
    }

    /// Message text displayed in the region, if the region holds a single message
    pub fn message(&self) -> Option<&str> {
        match self {
            ListContent::Placeholder => Some(PLACEHOLDER_TEXT),
            ListContent::Loading => Some(LOADING_TEXT),
            ListContent::Message(text) => Some(text.as_str()),
            ListContent::Cards(_) | ListContent::Cleared => None,
        }
    }
}

/// Error message region. Hidden regions always carry empty text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorRegion {
    pub visible: bool,
    pub text: String,
}

impl ErrorRegion {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            visible: true,
            text: text.into(),
        }
    }
}

/// Typed access to the page the coordinator drives
pub trait Page: Send {
    /// Current value of the product identifier input
    fn product_id(&self) -> String;

    /// Current value of the recommendation count input
    fn num_recommendations(&self) -> String;

    /// Empties the product identifier input
    fn clear_product_id(&mut self);

    /// Replaces everything in the recommendations list region
    fn render_list(&mut self, content: ListContent);

    /// Makes the error region visible with the given text
    fn show_error(&mut self, text: &str);

    /// Hides the error region and clears its text
    fn hide_error(&mut self);
}
