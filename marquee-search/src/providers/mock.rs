//! Mock provider implementation for testing.

use async_trait::async_trait;
use marquee_core::{MediaItem, MediaKind};
use parking_lot::Mutex;

use super::MediaProvider;
use crate::Result;
use crate::errors::MediaSearchError;
use crate::types::SearchResults;

/// Mock provider for testing.
///
/// Returns canned results for every query, records each call, and can be
/// switched to fail one or both catalogs.
#[derive(Debug, Default)]
pub struct MockProvider {
    movies: Vec<MediaItem>,
    tv_shows: Vec<MediaItem>,
    fail_movies: bool,
    fail_tv: bool,
    calls: Mutex<Vec<(MediaKind, String)>>,
}

impl MockProvider {
    /// Creates a mock provider that returns no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock provider with one movie and one TV show per query.
    pub fn with_sample_data() -> Self {
        Self::new()
            .with_movies(vec![MediaItem::new(MediaKind::Movie, 1, "Mock Movie")])
            .with_tv_shows(vec![MediaItem::new(MediaKind::TvShow, 2, "Mock Show")])
    }

    /// Sets the movies returned for every query.
    pub fn with_movies(mut self, movies: Vec<MediaItem>) -> Self {
        self.movies = movies;
        self
    }

    /// Sets the TV shows returned for every query.
    pub fn with_tv_shows(mut self, tv_shows: Vec<MediaItem>) -> Self {
        self.tv_shows = tv_shows;
        self
    }

    /// Makes movie searches fail with a network error.
    pub fn failing_movies(mut self) -> Self {
        self.fail_movies = true;
        self
    }

    /// Makes TV searches fail with a network error.
    pub fn failing_tv(mut self) -> Self {
        self.fail_tv = true;
        self
    }

    /// Every `(kind, query)` the provider has been asked for, in order.
    pub fn calls(&self) -> Vec<(MediaKind, String)> {
        self.calls.lock().clone()
    }

    /// Number of calls made for `kind`.
    pub fn call_count(&self, kind: MediaKind) -> usize {
        self.calls.lock().iter().filter(|(k, _)| *k == kind).count()
    }

    fn respond(
        &self,
        kind: MediaKind,
        query: &str,
        items: &[MediaItem],
        fail: bool,
    ) -> Result<SearchResults> {
        self.calls.lock().push((kind, query.to_string()));

        if fail {
            return Err(MediaSearchError::NetworkError {
                reason: format!("mock {kind} search unavailable"),
            });
        }
        Ok(SearchResults::single_page(items.to_vec()))
    }
}

#[async_trait]
impl MediaProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search_movies(
        &self,
        query: &str,
        _page: u32,
    ) -> Result<SearchResults> {
        self.respond(MediaKind::Movie, query, &self.movies, self.fail_movies)
    }

    async fn search_tv_shows(
        &self,
        query: &str,
        _page: u32,
    ) -> Result<SearchResults> {
        self.respond(MediaKind::TvShow, query, &self.tv_shows, self.fail_tv)
    }
}
