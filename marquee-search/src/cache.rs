//! Time-bounded LRU cache for search responses.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use marquee_core::MediaKind;
use parking_lot::Mutex;

use crate::types::SearchResults;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: MediaKind,
    query: String,
}

impl CacheKey {
    fn new(kind: MediaKind, query: &str) -> Self {
        Self {
            kind,
            query: query.trim().to_lowercase(),
        }
    }
}

/// Caches successful search responses per `(kind, normalized query)`.
///
/// Entries older than the TTL are treated as misses and evicted on lookup.
#[derive(Debug)]
pub struct SearchCache {
    entries: Option<Mutex<LruCache<CacheKey, (Instant, SearchResults)>>>,
    ttl: Duration,
}

impl SearchCache {
    /// Creates a cache holding up to `capacity` responses. Zero disables caching.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            ttl,
        }
    }

    /// Creates a cache that never stores anything.
    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Returns a fresh cached response, if any.
    pub fn get(&self, kind: MediaKind, query: &str) -> Option<SearchResults> {
        let mut entries = self.entries.as_ref()?.lock();
        let key = CacheKey::new(kind, query);

        let (stored_at, results) = entries.get(&key)?;
        if stored_at.elapsed() < self.ttl {
            return Some(results.clone());
        }

        entries.pop(&key);
        None
    }

    /// Stores a successful response.
    pub fn insert(&self, kind: MediaKind, query: &str, results: SearchResults) {
        if let Some(entries) = &self.entries {
            entries
                .lock()
                .put(CacheKey::new(kind, query), (Instant::now(), results));
        }
    }

    /// Number of stored responses, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.lock().len())
    }

    /// Whether the cache holds no responses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use marquee_core::MediaItem;

    use super::*;

    fn results(title: &str) -> SearchResults {
        SearchResults::single_page(vec![MediaItem::new(MediaKind::Movie, 1, title)])
    }

    #[test]
    fn test_hit_is_case_and_whitespace_insensitive() {
        let cache = SearchCache::new(8, Duration::from_secs(60));
        cache.insert(MediaKind::Movie, "Dune", results("Dune"));

        assert_eq!(
            cache.get(MediaKind::Movie, "  dune "),
            Some(results("Dune"))
        );
        assert_eq!(cache.get(MediaKind::TvShow, "dune"), None);
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let cache = SearchCache::new(8, Duration::ZERO);
        cache.insert(MediaKind::Movie, "dune", results("Dune"));

        assert_eq!(cache.get(MediaKind::Movie, "dune"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let cache = SearchCache::new(2, Duration::from_secs(60));
        cache.insert(MediaKind::Movie, "a", results("A"));
        cache.insert(MediaKind::Movie, "b", results("B"));
        cache.get(MediaKind::Movie, "a");
        cache.insert(MediaKind::Movie, "c", results("C"));

        assert!(cache.get(MediaKind::Movie, "a").is_some());
        assert!(cache.get(MediaKind::Movie, "b").is_none());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = SearchCache::disabled();
        cache.insert(MediaKind::Movie, "a", results("A"));
        assert!(cache.get(MediaKind::Movie, "a").is_none());
        assert!(cache.is_empty());
    }
}
