//! Data types for media search functionality.

use marquee_core::{MediaItem, MediaKind};
use serde::{Deserialize, Serialize};

use crate::errors::MediaSearchError;

/// One page of search results from a single catalog (movies or TV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Page number, starting at 1
    pub page: u32,
    /// Items on this page
    pub results: Vec<MediaItem>,
    /// Total matches across all pages
    pub total_results: u32,
    /// Total number of pages available
    pub total_pages: u32,
}

impl SearchResults {
    /// Results for a query that matched nothing or was never sent.
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_results: 0,
            total_pages: 0,
        }
    }

    /// Wraps a complete, single-page result list.
    pub fn single_page(results: Vec<MediaItem>) -> Self {
        let total = saturating_count(results.len());
        Self {
            page: 1,
            results,
            total_results: total,
            total_pages: u32::from(total > 0),
        }
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Default for SearchResults {
    fn default() -> Self {
        Self::empty()
    }
}

/// Outcome of searching movies and TV shows for the same query.
///
/// Each side fails independently.
#[derive(Debug, Clone)]
pub struct CombinedResults {
    /// Trimmed query both searches ran with
    pub query: String,
    /// Movie search outcome
    pub movies: Result<SearchResults, MediaSearchError>,
    /// TV search outcome
    pub tv: Result<SearchResults, MediaSearchError>,
}

impl CombinedResults {
    /// Movie results, with a failed search counted as no results.
    pub fn movies_or_empty(&self) -> SearchResults {
        self.movies.clone().unwrap_or_default()
    }

    /// TV results, with a failed search counted as no results.
    pub fn tv_or_empty(&self) -> SearchResults {
        self.tv.clone().unwrap_or_default()
    }

    /// Loaded items across both catalogs. Failed sides count as zero.
    pub fn total_loaded(&self) -> usize {
        self.movies.as_ref().map_or(0, SearchResults::len)
            + self.tv.as_ref().map_or(0, SearchResults::len)
    }
}

/// Which catalogs a search should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Movies only
    Movie,
    /// TV shows only
    Tv,
    /// Both catalogs
    #[default]
    All,
}

impl SearchKind {
    /// Whether movies are part of this search.
    pub fn includes_movies(self) -> bool {
        matches!(self, SearchKind::Movie | SearchKind::All)
    }

    /// Whether TV shows are part of this search.
    pub fn includes_tv(self) -> bool {
        matches!(self, SearchKind::Tv | SearchKind::All)
    }
}

impl From<MediaKind> for SearchKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => SearchKind::Movie,
            MediaKind::TvShow => SearchKind::Tv,
        }
    }
}

impl std::str::FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(SearchKind::All),
            other => other.parse::<MediaKind>().map(SearchKind::from),
        }
    }
}

/// Item counts are `u32` on the wire; larger lists clamp rather than wrap.
fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_clamp_instead_of_wrapping() {
        assert_eq!(saturating_count(3), 3);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_count(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_single_page_totals() {
        let results = SearchResults::single_page(vec![
            MediaItem::new(MediaKind::Movie, 1, "A"),
            MediaItem::new(MediaKind::Movie, 2, "B"),
        ]);
        assert_eq!(results.len(), 2);
        assert_eq!(results.total_results, 2);
        assert_eq!(results.total_pages, 1);

        let empty = SearchResults::single_page(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_total_loaded_ignores_failed_side() {
        let combined = CombinedResults {
            query: "alien".to_string(),
            movies: Ok(SearchResults::single_page(vec![MediaItem::new(
                MediaKind::Movie,
                348,
                "Alien",
            )])),
            tv: Err(MediaSearchError::NetworkError {
                reason: "timed out".to_string(),
            }),
        };

        assert_eq!(combined.total_loaded(), 1);
        assert!(combined.tv_or_empty().is_empty());
    }

    #[test]
    fn test_parse_search_kind() {
        assert_eq!("".parse::<SearchKind>(), Ok(SearchKind::All));
        assert_eq!("movie".parse::<SearchKind>(), Ok(SearchKind::Movie));
        assert_eq!("tv".parse::<SearchKind>(), Ok(SearchKind::Tv));
        assert!("podcast".parse::<SearchKind>().is_err());
        assert!(SearchKind::All.includes_movies() && SearchKind::All.includes_tv());
        assert!(!SearchKind::Tv.includes_movies());
    }
}
