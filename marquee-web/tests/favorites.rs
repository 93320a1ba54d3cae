//! Favorites toggling, page and JSON API

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use marquee_core::{FavoritesStore, MediaKey, MediaKind};
use marquee_search::MockProvider;
use serde_json::Value;
use tempfile::TempDir;

use common::{IMAGE_BASE, body_text, get, ok_text, post_form, router, state_with};

const DUNE_FORM: &str = "kind=movie&id=438631&title=Dune&poster_path=%2Fdune.jpg&release_date=2021-09-15&vote_average=7.8&vote_count=12000";

fn app_with(favorites: Arc<FavoritesStore>) -> axum::Router {
    router(state_with(Arc::new(MockProvider::new()), favorites))
}

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let favorites = Arc::new(FavoritesStore::in_memory());
    let app = app_with(favorites.clone());
    let key = MediaKey::new(MediaKind::Movie, 438631);

    let html = ok_text(post_form(&app, "/htmx/favorites/toggle", DUNE_FORM).await).await;
    assert!(html.contains(r#"aria-pressed="true""#));
    assert!(html.contains(r#"id="favorites-link" hx-swap-oob="true""#));
    assert!(favorites.is_favorite(key).await);

    let html = ok_text(post_form(&app, "/htmx/favorites/toggle", DUNE_FORM).await).await;
    assert!(html.contains(r#"aria-pressed="false""#));
    assert!(!favorites.is_favorite(key).await);
}

#[tokio::test]
async fn test_toggle_rejects_unknown_kind() {
    let app = app_with(Arc::new(FavoritesStore::in_memory()));

    let response = post_form(
        &app,
        "/htmx/favorites/toggle",
        "kind=podcast&id=1&title=Nope",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_toggle_persists_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    let favorites = Arc::new(FavoritesStore::open(&path).await.unwrap());
    let app = app_with(favorites);
    ok_text(post_form(&app, "/htmx/favorites/toggle", DUNE_FORM).await).await;

    let reopened = FavoritesStore::open(&path).await.unwrap();
    let entries = reopened.list().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item.title, "Dune");
    assert_eq!(entries[0].item.year(), Some(2021));
}

#[tokio::test]
async fn test_favorites_page_lists_saved_items() {
    let favorites = Arc::new(FavoritesStore::in_memory());
    let app = app_with(favorites.clone());

    let empty = ok_text(get(&app, "/favorites").await).await;
    assert!(empty.contains("No favorites yet"));

    ok_text(post_form(&app, "/htmx/favorites/toggle", DUNE_FORM).await).await;

    let html = ok_text(get(&app, "/favorites").await).await;
    assert!(html.contains("1 saved title"));
    assert!(html.contains(">Movies</h2>"));
    assert!(html.contains(&format!(r#"src="{IMAGE_BASE}/dune.jpg""#)));
}

#[tokio::test]
async fn test_search_results_mark_existing_favorites() {
    let favorites = Arc::new(FavoritesStore::in_memory());
    let app = router(state_with(
        Arc::new(MockProvider::with_sample_data()),
        favorites.clone(),
    ));

    ok_text(
        post_form(
            &app,
            "/htmx/favorites/toggle",
            "kind=movie&id=1&title=Mock%20Movie",
        )
        .await,
    )
    .await;

    let html = ok_text(get(&app, "/htmx/search/results?q=mock").await).await;
    assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    assert_eq!(html.matches(r#"aria-pressed="false""#).count(), 1);
}

#[tokio::test]
async fn test_api_favorites_json() {
    let app = app_with(Arc::new(FavoritesStore::in_memory()));
    ok_text(post_form(&app, "/htmx/favorites/toggle", DUNE_FORM).await).await;

    let response = get(&app, "/api/favorites").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();

    assert_eq!(json["count"], 1);
    assert_eq!(json["favorites"][0]["kind"], "movie");
    assert_eq!(json["favorites"][0]["year"], 2021);
    assert_eq!(
        json["favorites"][0]["poster_url"],
        format!("{IMAGE_BASE}/dune.jpg")
    );
}

#[tokio::test]
async fn test_play_logs_and_returns_toast() {
    let app = app_with(Arc::new(FavoritesStore::in_memory()));

    let html = ok_text(post_form(&app, "/htmx/play", "title=Dune").await).await;

    assert!(html.contains("Playing: Dune"));
}
