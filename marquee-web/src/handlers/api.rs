//! JSON API handlers for search and favorites

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use marquee_core::MediaItem;
use marquee_search::{MediaSearchError, SearchKind, SearchResults};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::server::AppState;

/// Query string for `/api/search`
#[derive(Debug, Deserialize)]
pub struct ApiSearchQuery {
    /// Search text
    pub q: Option<String>,
    /// `movie`, `tv` or `all`
    pub kind: Option<String>,
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

fn item_json(state: &AppState, item: &MediaItem) -> Value {
    json!({
        "id": item.id,
        "kind": item.kind.as_str(),
        "title": item.title,
        "overview": item.overview,
        "year": item.year(),
        "release_date": item.release_date,
        "rating": item.vote_average,
        "vote_count": item.vote_count,
        "poster_url": item.poster_path.as_deref().map(|path| state.image_url(path)),
    })
}

fn results_json(state: &AppState, results: &SearchResults) -> Vec<Value> {
    results
        .results
        .iter()
        .map(|item| item_json(state, item))
        .collect()
}

/// Searches the catalog.
///
/// A blank query returns empty lists. A failed search returns 502.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<ApiSearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let kind: SearchKind = params
        .kind
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|e: String| api_error(StatusCode::BAD_REQUEST, e))?;
    let query = params.q.as_deref().unwrap_or("").trim();

    let upstream = |e: MediaSearchError| {
        tracing::warn!("API search for {query:?} failed: {e}");
        api_error(StatusCode::BAD_GATEWAY, e.to_string())
    };

    let (movies, tv) = match kind {
        SearchKind::All => {
            let combined = state.search_service.search_all(query).await;
            (combined.movies.map_err(upstream)?, combined.tv.map_err(upstream)?)
        }
        SearchKind::Movie => (
            state
                .search_service
                .search_movies(query)
                .await
                .map_err(upstream)?,
            SearchResults::empty(),
        ),
        SearchKind::Tv => (
            SearchResults::empty(),
            state
                .search_service
                .search_tv_shows(query)
                .await
                .map_err(upstream)?,
        ),
    };

    Ok(Json(json!({
        "query": query,
        "kind": kind,
        "total_results": movies.len() + tv.len(),
        "movies": results_json(&state, &movies),
        "tv": results_json(&state, &tv),
    })))
}

/// Lists favorites, newest first.
pub async fn api_favorites(State(state): State<AppState>) -> Json<Value> {
    let favorites: Vec<Value> = state
        .favorites
        .list()
        .await
        .iter()
        .map(|entry| {
            let mut value = item_json(&state, &entry.item);
            value["added_at"] = json!(entry.added_at);
            value
        })
        .collect();

    Json(json!({
        "count": favorites.len(),
        "favorites": favorites,
    }))
}
