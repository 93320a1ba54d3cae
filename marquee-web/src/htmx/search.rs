//! Search results fragment

use axum::extract::{Query, State};
use axum::response::Html;

use crate::components::MediaCardContext;
use crate::pages::search::{SearchParams, SearchView, results_body, submit_button};
use crate::server::AppState;

/// Runs both searches and renders the settled results.
///
/// A failed search is logged and rendered as if it found nothing. The
/// response also resets the submit button out of band.
pub async fn search_results(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let params = SearchParams::from(pairs);
    let query = params.query();

    let view = if query.trim().is_empty() {
        SearchView::idle(query)
    } else {
        let results = state.search_service.search_all(query).await;
        if let Err(e) = &results.movies {
            tracing::warn!("Movie search for {:?} failed: {e}", results.query);
        }
        if let Err(e) = &results.tv {
            tracing::warn!("TV search for {:?} failed: {e}", results.query);
        }
        tracing::info!(
            "Search {:?} loaded {} results",
            results.query,
            results.total_loaded()
        );
        SearchView::from_results(query, &results)
    };

    let favorites = state.favorites.keys().await;
    let context = MediaCardContext {
        image_base_url: &state.image_base_url,
        favorites: &favorites,
    };

    Html(format!(
        "{}{}",
        results_body(&view, &context),
        submit_button(&view, true)
    ))
}
