use crate::{
    models::RecommendationResponse,
    page::{ListContent, Page, NO_RESULTS_TEXT},
};

/// Maps a successful response onto list region content
///
/// Cards are kept in service order with no reordering or deduplication.
pub fn list_content(response: RecommendationResponse) -> ListContent {
    match response {
        RecommendationResponse::Informational(message) => ListContent::Message(message),
        RecommendationResponse::Empty => ListContent::Message(NO_RESULTS_TEXT.to_string()),
        RecommendationResponse::Results(items) => ListContent::Cards(items),
    }
}

/// Replaces the list region with the rendering of `response`
pub fn render_response<P: Page + ?Sized>(page: &mut P, response: RecommendationResponse) {
    page.render_list(list_content(response));
}
