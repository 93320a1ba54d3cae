//! Catalog provider implementations for movie and TV search.

use async_trait::async_trait;

use crate::Result;
use crate::types::SearchResults;

pub mod demo;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod tmdb;

pub use demo::DemoProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;
pub use tmdb::TmdbProvider;

/// Trait for movie and TV metadata sources.
///
/// Implementations provide search through different backends (the TMDB API,
/// the offline demo catalog, mock providers for testing).
#[async_trait]
pub trait MediaProvider: Send + Sync + std::fmt::Debug {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Searches movies by title.
    ///
    /// # Errors
    /// - `MediaSearchError::NetworkError` - Network connectivity issues
    /// - `MediaSearchError::ProviderError` - Provider rejected the request
    /// - `MediaSearchError::ParseError` - Provider response was malformed
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults>;

    /// Searches TV shows by name.
    ///
    /// # Errors
    /// - `MediaSearchError::NetworkError` - Network connectivity issues
    /// - `MediaSearchError::ProviderError` - Provider rejected the request
    /// - `MediaSearchError::ParseError` - Provider response was malformed
    async fn search_tv_shows(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults>;
}
