//! Favorite toggle handler

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use chrono::NaiveDate;
use marquee_core::{MediaItem, MediaKind};
use serde::Deserialize;

use crate::components::{favorite_button, favorites_link};
use crate::server::AppState;

/// Item snapshot posted by a favorite toggle
#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    /// `movie` or `tv`
    pub kind: String,
    /// Catalog identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Plot summary
    pub overview: Option<String>,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Release or first air date, `YYYY-MM-DD`
    pub release_date: Option<String>,
    /// Average rating
    pub vote_average: Option<f32>,
    /// Number of ratings
    pub vote_count: Option<u32>,
    /// Original language code
    pub original_language: Option<String>,
}

impl FavoriteForm {
    /// Rebuilds the media item the form describes.
    ///
    /// # Errors
    /// - Unknown media kind
    /// - Blank title
    pub fn into_item(self) -> Result<MediaItem, String> {
        let kind: MediaKind = self.kind.parse()?;
        if self.title.trim().is_empty() {
            return Err("title is required".to_string());
        }

        Ok(MediaItem {
            overview: self.overview.filter(|s| !s.is_empty()),
            poster_path: self.poster_path.filter(|s| !s.is_empty()),
            backdrop_path: self.backdrop_path.filter(|s| !s.is_empty()),
            release_date: self
                .release_date
                .and_then(|date| NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()),
            vote_average: self.vote_average,
            vote_count: self.vote_count.unwrap_or(0),
            original_language: self.original_language.filter(|s| !s.is_empty()),
            ..MediaItem::new(kind, self.id, self.title)
        })
    }
}

/// Toggles an item in favorites and returns its updated button.
///
/// The header favorites count is refreshed out of band.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Form(form): Form<FavoriteForm>,
) -> Result<Html<String>, StatusCode> {
    let item = form.into_item().map_err(|e| {
        tracing::warn!("Rejected favorite toggle: {e}");
        StatusCode::BAD_REQUEST
    })?;

    let is_favorite = state.favorites.toggle(&item).await.map_err(|e| {
        tracing::error!("Failed to update favorites: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let count = state.favorites.len().await;
    Ok(Html(format!(
        "{}{}",
        favorite_button(&item, is_favorite),
        favorites_link(count, true)
    )))
}
