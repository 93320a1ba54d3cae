//! Favorites page - saved movies and shows, newest first

use std::collections::HashSet;

use axum::extract::State;
use axum::response::Html;
use marquee_core::{MediaItem, MediaKind};

use crate::components::{MediaCardContext, layout, media_section, page_header};
use crate::pages::render_page;
use crate::server::AppState;

/// Renders the favorites page.
pub async fn favorites_page(State(state): State<AppState>) -> Html<String> {
    let entries = state.favorites.list().await;
    let keys: HashSet<_> = entries.iter().map(|entry| entry.item.key()).collect();
    let context = MediaCardContext {
        image_base_url: &state.image_base_url,
        favorites: &keys,
    };

    let (movies, shows): (Vec<MediaItem>, Vec<MediaItem>) = entries
        .into_iter()
        .map(|entry| entry.item)
        .partition(|item| item.kind == MediaKind::Movie);

    let body = if movies.is_empty() && shows.is_empty() {
        format!(
            r#"<div class="text-center py-12">
                <div class="text-6xl mb-4">♡</div>
                <h2 class="text-2xl font-semibold text-white mb-4">No favorites yet</h2>
                <p class="text-gray-400 mb-8">Tap the heart on any movie or show to save it here.</p>
                {}
            </div>"#,
            layout::button(
                "Find something to watch",
                "secondary",
                Some(r#"onclick="window.location.href='/search'""#)
            )
        )
    } else {
        let mut sections = String::new();
        if !movies.is_empty() {
            sections.push_str(&media_section("Movies", &movies, &context, false));
        }
        if !shows.is_empty() {
            sections.push_str(&media_section("TV Shows", &shows, &context, false));
        }
        sections
    };

    let subtitle = match keys.len() {
        1 => "1 saved title".to_string(),
        n => format!("{n} saved titles"),
    };
    let content = format!(
        r#"{}
        {body}"#,
        page_header("Favorites", Some(&subtitle))
    );

    render_page("Favorites", keys.len(), &content)
}
