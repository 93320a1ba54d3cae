//! Search page - find movies and TV shows by title
//!
//! The first response renders the loading state for a non-empty query and
//! asks HTMX to fetch the results fragment on load. The fragment replaces
//! the results area and resets the submit button out of band.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use marquee_core::MediaItem;
use marquee_search::{CombinedResults, SearchResults};

use crate::components::{MediaCardContext, escape, layout, media_section, page_header};
use crate::pages::render_page;
use crate::server::AppState;

/// Query string accepted by the search page and results fragment.
///
/// A repeated `q` keeps its first value.
#[derive(Debug, Default)]
pub struct SearchParams {
    /// Search text as it appears in the URL
    pub q: Option<String>,
}

impl From<Vec<(String, String)>> for SearchParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value));
        Self { q }
    }
}

impl SearchParams {
    /// Raw query text, empty when absent.
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// Everything the search page needs to render one state.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    /// Query exactly as entered
    pub query: String,
    /// Movie results once loaded
    pub movies: Option<SearchResults>,
    /// TV results once loaded
    pub tv: Option<SearchResults>,
    /// Movie search in flight
    pub movie_loading: bool,
    /// TV search in flight
    pub tv_loading: bool,
}

impl SearchView {
    /// State with no search running.
    pub fn idle(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Self::default()
        }
    }

    /// State while both searches are in flight.
    pub fn loading(query: &str) -> Self {
        Self {
            query: query.to_string(),
            movie_loading: true,
            tv_loading: true,
            ..Self::default()
        }
    }

    /// State after both searches settled. Failed sides show as empty.
    pub fn from_results(query: &str, results: &CombinedResults) -> Self {
        Self {
            query: query.to_string(),
            movies: Some(results.movies_or_empty()),
            tv: Some(results.tv_or_empty()),
            movie_loading: false,
            tv_loading: false,
        }
    }

    /// Number of loaded items across both sections.
    pub fn total_results(&self) -> usize {
        self.movies.as_ref().map_or(0, SearchResults::len)
            + self.tv.as_ref().map_or(0, SearchResults::len)
    }

    /// Whether either search is still running.
    pub fn is_loading(&self) -> bool {
        self.movie_loading || self.tv_loading
    }

    /// Submit is disabled while loading or when there is nothing to search.
    pub fn submit_disabled(&self) -> bool {
        self.is_loading() || self.query.trim().is_empty()
    }

    /// Status line under the form, if any.
    pub fn status_message(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }

        let total = self.total_results();
        let message = if total > 0 {
            format!(r#"Found {total} results for "{}""#, self.query)
        } else if self.is_loading() {
            format!(r#"Searching for "{}"..."#, self.query)
        } else {
            format!(r#"No results found for "{}""#, self.query)
        };
        Some(message)
    }

    /// Whether the "no results" panel should be shown.
    pub fn shows_empty_state(&self) -> bool {
        !self.query.is_empty() && !self.is_loading() && self.total_results() == 0
    }

    fn movie_results(&self) -> &[MediaItem] {
        self.movies.as_ref().map_or(&[], |r| r.results.as_slice())
    }

    fn tv_results(&self) -> &[MediaItem] {
        self.tv.as_ref().map_or(&[], |r| r.results.as_slice())
    }
}

/// Canonical page URL for a query.
pub fn search_url(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query))
}

/// URL of the results fragment for a query.
pub fn results_url(query: &str) -> String {
    format!("/htmx/search/results?q={}", urlencoding::encode(query))
}

/// Renders the search page.
///
/// Redirects padded queries to their trimmed form so every search has one
/// canonical URL.
pub async fn search_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SearchParams::from(pairs);
    let query = params.query();
    let trimmed = query.trim();

    if !trimmed.is_empty() && trimmed != query {
        return Redirect::to(&search_url(trimmed)).into_response();
    }

    let view = if trimmed.is_empty() {
        SearchView::idle(query)
    } else {
        tracing::debug!("Search page requested for {trimmed:?}");
        SearchView::loading(query)
    };

    let favorites = state.favorites.keys().await;
    let context = MediaCardContext {
        image_base_url: &state.image_base_url,
        favorites: &favorites,
    };

    let content = format!(
        r#"{}
        {}
        {}"#,
        page_header("Search", None),
        search_form(&view),
        results_container(&view, &context)
    );

    render_page("Search", favorites.len(), &content).into_response()
}

/// Renders the search form.
pub fn search_form(view: &SearchView) -> String {
    let input = layout::input(
        "q",
        "Search for movies and TV shows...",
        &view.query,
        Some(
            r#"aria-label="Search" autocomplete="off" oninput="const b = document.getElementById('search-submit'); b.disabled = b.dataset.loading === 'true' || !this.value.trim();""#,
        ),
    );

    format!(
        r#"<form action="/search" method="get" role="search" class="mb-8 max-w-2xl">
            <div class="relative">
                <span class="absolute left-4 top-1/2 -translate-y-1/2 text-gray-400" aria-hidden="true">🔍</span>
                {input}
                <div class="absolute right-2 top-1/2 -translate-y-1/2">
                    {}
                </div>
            </div>
        </form>"#,
        submit_button(view, false)
    )
}

/// Renders the submit button, optionally as an out-of-band swap.
pub fn submit_button(view: &SearchView, out_of_band: bool) -> String {
    let label = if view.is_loading() {
        "Searching..."
    } else {
        "Search"
    };

    let mut attributes = format!(
        r#"type="submit" id="search-submit" data-loading="{}""#,
        view.is_loading()
    );
    if view.submit_disabled() {
        attributes.push_str(" disabled");
    }
    if out_of_band {
        attributes.push_str(r#" hx-swap-oob="true""#);
    }

    layout::button(label, "primary", Some(&attributes))
}

/// Renders the results container for the initial page.
///
/// A loading view fetches its own contents as soon as it is inserted.
pub fn results_container(view: &SearchView, context: &MediaCardContext) -> String {
    let trigger = if view.is_loading() {
        format!(
            r#" hx-get="{}" hx-trigger="load" hx-swap="innerHTML""#,
            escape(&results_url(view.query.trim()))
        )
    } else {
        String::new()
    };

    format!(
        r#"<div id="search-results"{trigger}>
            {}
        </div>"#,
        results_body(view, context)
    )
}

/// Renders the status line, result sections and empty state.
pub fn results_body(view: &SearchView, context: &MediaCardContext) -> String {
    let mut html = String::new();

    if let Some(message) = view.status_message() {
        html.push_str(&format!(
            r#"<p class="text-gray-400 mb-6" id="search-status">{}</p>"#,
            escape(&message)
        ));
    }

    let movies = view.movie_results();
    if !movies.is_empty() {
        html.push_str(&media_section("Movies", movies, context, view.movie_loading));
    }

    let tv = view.tv_results();
    if !tv.is_empty() {
        html.push_str(&media_section("TV Shows", tv, context, view.tv_loading));
    }

    if view.shows_empty_state() {
        html.push_str(&format!(
            r#"<div class="text-center py-12" id="search-empty">
                <p class="text-xl text-gray-300 mb-2">No results found for "{}"</p>
                <p class="text-gray-500">Try searching with different keywords.</p>
            </div>"#,
            escape(&view.query)
        ));
    }

    html
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use marquee_core::{MediaItem, MediaKind};
    use marquee_search::MediaSearchError;

    use super::*;

    fn results(items: &[(&str, u64, MediaKind)]) -> SearchResults {
        SearchResults::single_page(
            items
                .iter()
                .map(|(title, id, kind)| MediaItem::new(*kind, *id, *title))
                .collect(),
        )
    }

    fn render(view: &SearchView) -> String {
        let favorites = HashSet::new();
        let context = MediaCardContext {
            image_base_url: "",
            favorites: &favorites,
        };
        results_body(view, &context)
    }

    #[test]
    fn test_no_query_has_no_status_and_disabled_submit() {
        let view = SearchView::idle("");
        assert_eq!(view.status_message(), None);
        assert!(view.submit_disabled());
        assert!(!view.shows_empty_state());
        assert!(render(&view).trim().is_empty());
    }

    #[test]
    fn test_loading_state() {
        let view = SearchView::loading("dune");
        assert_eq!(
            view.status_message().as_deref(),
            Some(r#"Searching for "dune"..."#)
        );
        assert!(view.submit_disabled());
        assert!(!view.shows_empty_state());
        assert!(submit_button(&view, false).contains("Searching..."));
    }

    #[test]
    fn test_found_counts_loaded_items_from_both_sides() {
        let combined = CombinedResults {
            query: "dune".to_string(),
            movies: Ok(results(&[
                ("Dune", 438631, MediaKind::Movie),
                ("Dune: Part Two", 693134, MediaKind::Movie),
            ])),
            tv: Ok(results(&[("Dune: Prophecy", 90228, MediaKind::TvShow)])),
        };
        let view = SearchView::from_results("dune", &combined);

        assert_eq!(view.total_results(), 3);
        assert_eq!(
            view.status_message().as_deref(),
            Some(r#"Found 3 results for "dune""#)
        );
        assert!(!view.submit_disabled());

        let html = render(&view);
        assert!(html.contains(">Movies</h2>"));
        assert!(html.contains(">TV Shows</h2>"));
        assert!(!html.contains("search-empty"));
    }

    #[test]
    fn test_sections_only_render_when_non_empty() {
        let combined = CombinedResults {
            query: "breaking".to_string(),
            movies: Ok(SearchResults::empty()),
            tv: Ok(results(&[("Breaking Bad", 1396, MediaKind::TvShow)])),
        };
        let html = render(&SearchView::from_results("breaking", &combined));

        assert!(!html.contains(">Movies</h2>"));
        assert!(html.contains(">TV Shows</h2>"));
    }

    #[test]
    fn test_failures_render_as_empty_state() {
        let failure = MediaSearchError::NetworkError {
            reason: "connection refused".to_string(),
        };
        let combined = CombinedResults {
            query: "zzz".to_string(),
            movies: Err(failure.clone()),
            tv: Err(failure),
        };
        let view = SearchView::from_results("zzz", &combined);

        assert_eq!(
            view.status_message().as_deref(),
            Some(r#"No results found for "zzz""#)
        );
        assert!(view.shows_empty_state());

        let html = render(&view);
        assert!(html.contains("Try searching with different keywords."));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let view = SearchView::idle("<img src=x>");
        let html = render(&view);
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(!html.contains("<img src=x>"));
    }

    #[test]
    fn test_loading_container_fetches_encoded_results_url() {
        let favorites = HashSet::new();
        let context = MediaCardContext {
            image_base_url: "",
            favorites: &favorites,
        };
        let html = results_container(&SearchView::loading("star wars"), &context);

        assert!(html.contains(r#"hx-get="/htmx/search/results?q=star%20wars""#));
        assert!(html.contains(r#"hx-trigger="load""#));
        assert!(!results_container(&SearchView::idle(""), &context).contains("hx-get"));
    }

    #[test]
    fn test_out_of_band_submit_button() {
        let html = submit_button(&SearchView::idle("dune"), true);
        assert!(html.contains(r#"hx-swap-oob="true""#));
        assert!(html.contains(">Search</button>"));
        assert!(!html.contains("disabled "));
    }

    #[test]
    fn test_params_take_first_query() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("q".to_string(), "alien".to_string()),
            ("q".to_string(), "aliens".to_string()),
        ];
        assert_eq!(SearchParams::from(pairs).query(), "alien");
        assert_eq!(SearchParams::from(Vec::new()).query(), "");
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(search_url("the matrix"), "/search?q=the%20matrix");
        assert_eq!(search_url("a&b"), "/search?q=a%26b");
    }
}
