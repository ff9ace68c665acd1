use super::{html, text, ErrorRegion, ListContent, Page};

/// In-memory page holding the inputs and output regions as plain values
///
/// Used by the command-line front end and by tests; markup and terminal output
/// are produced from the current state on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryPage {
    product_id: String,
    num_recommendations: String,
    list: ListContent,
    error: ErrorRegion,
}

impl MemoryPage {
    /// Creates a page in its initial state: empty inputs, placeholder list, hidden error
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page with both inputs filled in
    pub fn with_inputs(product_id: impl Into<String>, num_recommendations: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            num_recommendations: num_recommendations.into(),
            ..Self::default()
        }
    }

    pub fn set_product_id(&mut self, value: impl Into<String>) {
        self.product_id = value.into();
    }

    pub fn set_num_recommendations(&mut self, value: impl Into<String>) {
        self.num_recommendations = value.into();
    }

    pub fn list(&self) -> &ListContent {
        &self.list
    }

    pub fn error(&self) -> &ErrorRegion {
        &self.error
    }

    /// Markup of the recommendations list region
    pub fn list_html(&self) -> String {
        html::render_list(&self.list)
    }

    /// Terminal rendering of the recommendations list region
    pub fn list_text(&self) -> String {
        text::render_list(&self.list)
    }
}

impl Page for MemoryPage {
    fn product_id(&self) -> String {
        self.product_id.clone()
    }

    fn num_recommendations(&self) -> String {
        self.num_recommendations.clone()
    }

    fn clear_product_id(&mut self) {
        self.product_id.clear();
    }

    fn render_list(&mut self, content: ListContent) {
        self.list = content;
    }

    fn show_error(&mut self, text: &str) {
        self.error = ErrorRegion::shown(text);
    }

    fn hide_error(&mut self) {
        self.error = ErrorRegion::hidden();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PLACEHOLDER_TEXT;

    #[test]
    fn test_new_page_initial_state() {
        let page = MemoryPage::new();
        assert_eq!(page.product_id(), "");
        assert_eq!(page.list(), &ListContent::Placeholder);
        assert_eq!(page.list().message(), Some(PLACEHOLDER_TEXT));
        assert_eq!(page.error(), &ErrorRegion::hidden());
    }

    #[test]
    fn test_error_region_toggles() {
        let mut page = MemoryPage::with_inputs("101", "5");
        page.show_error("Error: boom");
        assert!(page.error().visible);
        assert_eq!(page.error().text, "Error: boom");

        page.hide_error();
        assert!(!page.error().visible);
        assert!(page.error().text.is_empty());
    }

    #[test]
    fn test_clear_product_id_keeps_count() {
        let mut page = MemoryPage::with_inputs("101", "7");
        page.clear_product_id();
        assert_eq!(page.product_id(), "");
        assert_eq!(page.num_recommendations(), "7");
    }
}
