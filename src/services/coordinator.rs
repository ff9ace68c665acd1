use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::Mutex;
use tracing::instrument;

use crate::{
    models::Query,
    page::{ListContent, Page},
    services::{providers::RecommendationSource, renderer},
};

/// What became of a single `get_recommendations` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The response was rendered into the list region
    Rendered,
    /// The request failed and the error region was shown
    Failed,
    /// A later request or a reset started before this one finished; nothing was rendered
    Superseded,
}

/// Drives the recommendations page: one request per user action, plus reset
///
/// Every request and every reset takes the next sequence number while holding the
/// page lock. A response is rendered only if its number is still the latest, so
/// the page always reflects the most recent action.
pub struct RecommendationCoordinator<P: Page> {
    source: Arc<dyn RecommendationSource>,
    page: Arc<Mutex<P>>,
    sequence: AtomicU64,
}

impl<P: Page> RecommendationCoordinator<P> {
    pub fn new(source: Arc<dyn RecommendationSource>, page: Arc<Mutex<P>>) -> Self {
        Self {
            source,
            page,
            sequence: AtomicU64::new(0),
        }
    }

    /// Shared handle to the page being driven
    pub fn page(&self) -> Arc<Mutex<P>> {
        Arc::clone(&self.page)
    }

    /// Reads the inputs, requests recommendations and renders the result
    ///
    /// The loading placeholder is shown and the error region hidden before the
    /// request is sent. Failures never propagate: they end up in the error region.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn get_recommendations(&self) -> RequestOutcome {
        let (ticket, query) = {
            let mut page = self.page.lock().await;
            page.render_list(ListContent::Loading);
            page.hide_error();

            let query = Query::from_inputs(&page.product_id(), &page.num_recommendations());
            (self.sequence.fetch_add(1, Ordering::SeqCst) + 1, query)
        };

        tracing::debug!(
            ticket,
            product_id = query.product_id.as_deref().unwrap_or(""),
            num_recommendations = %query.num_recommendations,
            "Starting recommendations request"
        );

        let result = self.source.fetch_recommendations(&query).await;

        let mut page = self.page.lock().await;
        let latest = self.sequence.load(Ordering::SeqCst);
        if ticket != latest {
            tracing::debug!(ticket, latest, "Discarding superseded recommendations response");
            return RequestOutcome::Superseded;
        }

        match result {
            Ok(response) => {
                renderer::render_response(&mut *page, response);
                RequestOutcome::Rendered
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching recommendations");
                page.render_list(ListContent::Cleared);
                page.show_error(&format!("Error: {}", e.user_message()));
                RequestOutcome::Failed
            }
        }
    }

    /// Restores the placeholder, empties the product id input and hides the error
    ///
    /// Any request still in flight is superseded.
    pub async fn reset(&self) {
        let mut page = self.page.lock().await;
        self.sequence.fetch_add(1, Ordering::SeqCst);
        page.render_list(ListContent::Placeholder);
        page.clear_product_id();
        page.hide_error();
    }
}
