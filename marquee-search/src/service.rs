//! Media search service
//!
//! Fronts a [`MediaProvider`] with query normalization and a response cache,
//! and runs movie and TV searches side by side.

use std::sync::Arc;

use marquee_core::{MarqueeConfig, MediaKind, RuntimeMode};

use crate::cache::SearchCache;
use crate::Result;
use crate::providers::{DemoProvider, MediaProvider, TmdbProvider};
use crate::types::{CombinedResults, SearchResults};

/// Media search service shared across request handlers.
#[derive(Debug, Clone)]
pub struct MediaSearchService {
    provider: Arc<dyn MediaProvider>,
    cache: Arc<SearchCache>,
}

impl MediaSearchService {
    /// Creates a service over `provider` without caching.
    pub fn new(provider: Arc<dyn MediaProvider>) -> Self {
        Self::with_cache(provider, SearchCache::disabled())
    }

    /// Creates a service over `provider` with the given response cache.
    pub fn with_cache(provider: Arc<dyn MediaProvider>, cache: SearchCache) -> Self {
        Self {
            provider,
            cache: Arc::new(cache),
        }
    }

    /// Creates a service over the offline demo catalog.
    pub fn new_demo() -> Self {
        Self::new(Arc::new(DemoProvider::new()))
    }

    /// Creates the service appropriate for the runtime mode.
    ///
    /// Production mode talks to TMDB; development mode serves the demo
    /// catalog. Both get the configured response cache.
    ///
    /// # Errors
    /// - `MediaSearchError::Configuration` - Production mode without a TMDB API key
    pub fn from_config(config: &MarqueeConfig, mode: RuntimeMode) -> Result<Self> {
        let provider: Arc<dyn MediaProvider> = if mode.is_production() {
            Arc::new(TmdbProvider::new(&config.catalog)?)
        } else {
            Arc::new(DemoProvider::new())
        };
        let cache = SearchCache::new(config.catalog.cache_capacity, config.catalog.cache_ttl);

        tracing::info!(
            "Search service using {} provider ({mode} mode, cache capacity {})",
            provider.name(),
            config.catalog.cache_capacity
        );

        Ok(Self::with_cache(provider, cache))
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Search for movies using query string.
    ///
    /// Blank queries return empty results without contacting the provider.
    ///
    /// # Errors
    /// - `MediaSearchError::NetworkError` - Network connectivity issues
    /// - `MediaSearchError::ProviderError` - Provider rejected the request
    /// - `MediaSearchError::ParseError` - Provider response was malformed
    pub async fn search_movies(&self, query: &str) -> Result<SearchResults> {
        self.search_kind(MediaKind::Movie, query).await
    }

    /// Search for TV shows using query string.
    ///
    /// Blank queries return empty results without contacting the provider.
    ///
    /// # Errors
    /// - `MediaSearchError::NetworkError` - Network connectivity issues
    /// - `MediaSearchError::ProviderError` - Provider rejected the request
    /// - `MediaSearchError::ParseError` - Provider response was malformed
    pub async fn search_tv_shows(&self, query: &str) -> Result<SearchResults> {
        self.search_kind(MediaKind::TvShow, query).await
    }

    /// Searches movies and TV shows concurrently.
    ///
    /// The two searches are independent: one failing does not affect the
    /// other, and neither waits on the other to start.
    pub async fn search_all(&self, query: &str) -> CombinedResults {
        let (movies, tv) = tokio::join!(self.search_movies(query), self.search_tv_shows(query));

        CombinedResults {
            query: query.trim().to_string(),
            movies,
            tv,
        }
    }

    async fn search_kind(
        &self,
        kind: MediaKind,
        query: &str,
    ) -> Result<SearchResults> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults::empty());
        }

        if let Some(cached) = self.cache.get(kind, query) {
            tracing::debug!("Cache hit for {kind} search {query:?}");
            return Ok(cached);
        }

        let result = match kind {
            MediaKind::Movie => self.provider.search_movies(query, 1).await,
            MediaKind::TvShow => self.provider.search_tv_shows(query, 1).await,
        };

        match &result {
            Ok(results) => {
                tracing::debug!(
                    "{} {kind} search {query:?} returned {} of {} results",
                    self.provider.name(),
                    results.len(),
                    results.total_results
                );
                self.cache.insert(kind, query, results.clone());
            }
            Err(e) => {
                tracing::warn!("{} {kind} search {query:?} failed: {e}", self.provider.name());
            }
        }

        result
    }
}

impl Default for MediaSearchService {
    fn default() -> Self {
        Self::new_demo()
    }
}
