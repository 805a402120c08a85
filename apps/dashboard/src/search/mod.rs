use std::sync::Arc;

use tracing::{debug, error, info};

use crate::backend::csrf::{cookie_value, CSRF_COOKIE};
use crate::backend::{DashboardBackend, SearchRequest};
use crate::errors::DashboardError;
use crate::models::SearchResultRow;
use crate::ui::{FormSource, ResultsView, UiContext};

const GENERIC_SEARCH_ERROR: &str = "An error occurred while searching";

/// Elements the search widget needs. Both are required.
#[derive(Clone, Default)]
pub struct SearchBindings {
    pub form: Option<Arc<dyn FormSource>>,
    pub results: Option<Arc<dyn ResultsView>>,
}

/// Posts the search form and renders the rows it gets back.
pub struct SearchWidget {
    ctx: UiContext,
    form: Arc<dyn FormSource>,
    results: Arc<dyn ResultsView>,
    backend: Arc<dyn DashboardBackend>,
}

impl SearchWidget {
    pub fn new(
        ctx: UiContext,
        bindings: SearchBindings,
        backend: Arc<dyn DashboardBackend>,
    ) -> Result<Self, DashboardError> {
        Ok(Self {
            form: bindings
                .form
                .ok_or(DashboardError::MissingBinding("searchForm"))?,
            results: bindings
                .results
                .ok_or(DashboardError::MissingBinding("searchResults"))?,
            ctx,
            backend,
        })
    }

    /// Serializes the bound form and posts it. Overlapping submissions are
    /// not guarded against.
    pub async fn submit(&self) -> Result<Vec<SearchResultRow>, DashboardError> {
        let request = SearchRequest {
            fields: self.form.fields(),
            csrf_token: self
                .ctx
                .page
                .cookies()
                .and_then(|c| cookie_value(&c, CSRF_COOKIE)),
        };

        let response = match self.backend.search(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Search request failed: {e}");
                self.ctx.notifier.alert(GENERIC_SEARCH_ERROR);
                return Err(e);
            }
        };

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Search failed".to_string());
            self.ctx.notifier.alert(&format!("Error: {message}"));
            return Err(DashboardError::Rejected(message));
        }

        let Some(rows) = response.results else {
            error!("Search succeeded without a results list");
            self.ctx.notifier.alert(GENERIC_SEARCH_ERROR);
            return Err(DashboardError::MissingField("results"));
        };

        info!("Search returned {} result(s)", rows.len());
        self.results.clear();
        for row in &rows {
            self.results.append(row);
        }
        Ok(rows)
    }

    /// Change handler of the search-type select: the form is submitted again
    /// with whatever type is now selected.
    pub async fn handle_search_type_changed(&self) -> Result<Vec<SearchResultRow>, DashboardError> {
        debug!("search type changed; resubmitting");
        self.submit().await
    }
}
