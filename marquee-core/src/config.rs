//! Centralized configuration for Marquee.
//!
//! All tunable parameters live here so handlers and providers never carry
//! hard-coded hosts, URLs or limits.

use std::path::PathBuf;
use std::time::Duration;

/// Central configuration for all Marquee components.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub favorites: FavoritesConfig,
}

/// HTTP server binding and asset configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("marquee-web/static"),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` pair the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Movie and TV metadata source configuration.
///
/// Controls the TMDB endpoint, credentials, request behavior and the
/// search response cache.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the TMDB v3 API
    pub api_base_url: String,
    /// Base URL prepended to poster and backdrop paths
    pub image_base_url: String,
    /// TMDB API key (required in production mode)
    pub api_key: Option<String>,
    /// Response language sent with every request
    pub language: String,
    /// Whether adult titles are included in results
    pub include_adult: bool,
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Maximum number of cached search responses (0 disables caching)
    pub cache_capacity: usize,
    /// How long a cached search response stays fresh
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            api_key: None,
            language: "en-US".to_string(),
            include_adult: false,
            request_timeout: Duration::from_secs(10),
            user_agent: "marquee/0.1.0",
            cache_capacity: 256,
            cache_ttl: Duration::from_secs(300), // 5 minutes
        }
    }
}

/// Favorites persistence configuration.
#[derive(Debug, Clone)]
pub struct FavoritesConfig {
    /// JSON file holding the favorites list
    pub storage_path: PathBuf,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data/favorites.json"),
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Server overrides
        if let Some(host) = lookup("MARQUEE_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("MARQUEE_PORT").and_then(|p| p.parse().ok()) {
            config.server.port = port;
        }
        if let Some(dir) = lookup("MARQUEE_STATIC_DIR") {
            config.server.static_dir = PathBuf::from(dir);
        }

        // Catalog overrides
        if let Some(key) = lookup("TMDB_API_KEY").filter(|k| !k.trim().is_empty()) {
            config.catalog.api_key = Some(key.trim().to_string());
        }
        if let Some(base) = lookup("MARQUEE_API_BASE") {
            config.catalog.api_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(base) = lookup("MARQUEE_IMAGE_BASE") {
            config.catalog.image_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(language) = lookup("MARQUEE_LANGUAGE") {
            config.catalog.language = language;
        }
        if let Some(seconds) = lookup("MARQUEE_REQUEST_TIMEOUT").and_then(|t| t.parse().ok()) {
            config.catalog.request_timeout = Duration::from_secs(seconds);
        }
        if let Some(capacity) = lookup("MARQUEE_CACHE_CAPACITY").and_then(|c| c.parse().ok()) {
            config.catalog.cache_capacity = capacity;
        }
        if let Some(seconds) = lookup("MARQUEE_CACHE_TTL").and_then(|t| t.parse().ok()) {
            config.catalog.cache_ttl = Duration::from_secs(seconds);
        }

        // Favorites overrides
        if let Some(path) = lookup("MARQUEE_FAVORITES_PATH") {
            config.favorites.storage_path = PathBuf::from(path);
        }

        config
    }
}
