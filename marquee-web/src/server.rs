//! HTMX + Tailwind web server for Marquee
//!
//! Serves full pages, HTMX partial updates and JSON API endpoints from a
//! single router. All pages are rendered on the server.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::response::Redirect;
use axum::routing::{get, post};
use marquee_core::{FavoritesStore, MarqueeConfig, MarqueeError, RuntimeMode};
use marquee_search::{MediaSearchError, MediaSearchService};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::handlers::{api_favorites, api_search};
use crate::htmx::{play_item, search_results, toggle_favorite};
use crate::pages::{favorites_page, search_page};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Movie and TV search
    pub search_service: MediaSearchService,
    /// Persistent favorites list
    pub favorites: Arc<FavoritesStore>,
    /// Base URL prepended to poster paths
    pub image_base_url: String,
}

impl AppState {
    /// Creates state from its parts.
    pub fn new(
        search_service: MediaSearchService,
        favorites: Arc<FavoritesStore>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            search_service,
            favorites,
            image_base_url: image_base_url.into(),
        }
    }

    /// Builds poster URL for a catalog image path.
    pub fn image_url(&self, path: &str) -> String {
        format!("{}{}", self.image_base_url.trim_end_matches('/'), path)
    }
}

/// Builds the application router.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Pages
        .route("/", get(|| async { Redirect::to("/search") }))
        .route("/search", get(search_page))
        .route("/favorites", get(favorites_page))
        // HTMX partial update endpoints
        .route("/htmx/search/results", get(search_results))
        .route("/htmx/favorites/toggle", post(toggle_favorite))
        .route("/htmx/play", post(play_item))
        // JSON API endpoints (for external clients)
        .route("/api/search", get(api_search))
        .route("/api/favorites", get(api_favorites))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the web server and serves until the process is stopped.
///
/// # Errors
/// - Search service could not be configured for `mode`
/// - Favorites file could not be loaded
/// - Listener could not bind to the configured address
pub async fn run_server(config: MarqueeConfig, mode: RuntimeMode) -> marquee_core::Result<()> {
    let search_service =
        MediaSearchService::from_config(&config, mode).map_err(|e| match e {
            MediaSearchError::Configuration { reason } => MarqueeError::Configuration { reason },
            other => MarqueeError::Configuration {
                reason: other.to_string(),
            },
        })?;
    if mode.is_development() {
        tracing::info!("Serving the offline demo catalog");
    }

    let favorites = FavoritesStore::open(&config.favorites.storage_path).await?;
    tracing::info!(
        "Favorites file: {} ({} saved)",
        config.favorites.storage_path.display(),
        favorites.len().await
    );

    let state = AppState::new(
        search_service,
        Arc::new(favorites),
        config.catalog.image_base_url.clone(),
    );
    let app = build_router(state, &config.server.static_dir);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Marquee running on http://{address} ({mode} mode)");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use marquee_core::FavoritesError;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_production_without_api_key_is_configuration_error() {
        let config = MarqueeConfig::default();

        let err = run_server(config, RuntimeMode::Production)
            .await
            .unwrap_err();

        assert!(matches!(err, MarqueeError::Configuration { .. }));
        assert!(err.is_user_error());
        assert!(err.user_message().contains("TMDB_API_KEY"));
    }

    #[tokio::test]
    async fn test_corrupt_favorites_file_stops_startup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "not json").unwrap();

        let mut config = MarqueeConfig::default();
        config.favorites.storage_path = path;

        let err = run_server(config, RuntimeMode::Development)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MarqueeError::Favorites(FavoritesError::Corrupt { .. })
        ));
        assert!(!err.is_user_error());
        assert!(err.user_message().contains("is unreadable"));
    }
}
