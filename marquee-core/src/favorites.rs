//! Favorites persistence.
//!
//! Keeps an ordered list of favorited media items, optionally mirrored to a
//! JSON file. Every mutation rewrites the file through a temp file and rename
//! so a crash never leaves a half-written list behind.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::media::{MediaItem, MediaKey};

/// Errors that can occur while loading or saving favorites.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Failed to read favorites from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write favorites to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Favorites file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A favorited item and when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub item: MediaItem,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FavoritesFile {
    favorites: Vec<FavoriteEntry>,
}

/// Favorites list shared across request handlers.
#[derive(Debug)]
pub struct FavoritesStore {
    path: Option<PathBuf>,
    // Oldest first; readers reverse for display.
    entries: RwLock<Vec<FavoriteEntry>>,
}

impl FavoritesStore {
    /// Creates a store that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Opens the favorites file at `path`, starting empty if it does not exist.
    ///
    /// # Errors
    /// - `FavoritesError::Read` - The file exists but could not be read
    /// - `FavoritesError::Corrupt` - The file is not a valid favorites document
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, FavoritesError> {
        let path = path.into();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let file: FavoritesFile =
                    serde_json::from_slice(&bytes).map_err(|e| FavoritesError::Corrupt {
                        path: path.clone(),
                        reason: e.to_string(),
                    })?;
                file.favorites
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(FavoritesError::Read { path, source }),
        };

        tracing::debug!(
            "Loaded {} favorites from {}",
            entries.len(),
            path.display()
        );

        Ok(Self {
            path: Some(path),
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Adds the item if it is not a favorite, removes it otherwise.
    ///
    /// Returns `true` when the item is a favorite after the call.
    ///
    /// # Errors
    /// - `FavoritesError::Write` - The updated list could not be persisted
    pub async fn toggle(&self, item: &MediaItem) -> Result<bool, FavoritesError> {
        let mut entries = self.entries.write().await;
        let key = item.key();
        let mut updated = entries.clone();

        let now_favorite = match updated.iter().position(|entry| entry.item.key() == key) {
            Some(index) => {
                updated.remove(index);
                false
            }
            None => {
                updated.push(FavoriteEntry {
                    item: item.clone(),
                    added_at: Utc::now(),
                });
                true
            }
        };

        // Memory only changes once the file write succeeded.
        self.persist(&updated).await?;
        *entries = updated;
        tracing::info!(
            "{} favorite {} ({})",
            if now_favorite { "Added" } else { "Removed" },
            key,
            item.title
        );

        Ok(now_favorite)
    }

    /// Removes the item with `key`. Returns whether anything was removed.
    ///
    /// # Errors
    /// - `FavoritesError::Write` - The updated list could not be persisted
    pub async fn remove(&self, key: MediaKey) -> Result<bool, FavoritesError> {
        let mut entries = self.entries.write().await;
        let updated: Vec<FavoriteEntry> = entries
            .iter()
            .filter(|entry| entry.item.key() != key)
            .cloned()
            .collect();

        if updated.len() == entries.len() {
            return Ok(false);
        }
        self.persist(&updated).await?;
        *entries = updated;
        Ok(true)
    }

    /// Removes every favorite.
    ///
    /// # Errors
    /// - `FavoritesError::Write` - The empty list could not be persisted
    pub async fn clear(&self) -> Result<(), FavoritesError> {
        let mut entries = self.entries.write().await;
        self.persist(&[]).await?;
        entries.clear();
        Ok(())
    }

    pub async fn is_favorite(&self, key: MediaKey) -> bool {
        self.entries
            .read()
            .await
            .iter()
            .any(|entry| entry.item.key() == key)
    }

    /// Keys of every favorite, for rendering many items at once.
    pub async fn keys(&self) -> HashSet<MediaKey> {
        self.entries
            .read()
            .await
            .iter()
            .map(|entry| entry.item.key())
            .collect()
    }

    /// All favorites, most recently added first.
    pub async fn list(&self) -> Vec<FavoriteEntry> {
        self.entries.read().await.iter().rev().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn persist(&self, entries: &[FavoriteEntry]) -> Result<(), FavoritesError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let document = serde_json::to_vec_pretty(&FavoritesFile {
            favorites: entries.to_vec(),
        })?;

        let write_err = |source: std::io::Error| FavoritesError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &document)
            .await
            .map_err(write_err)?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn movie(id: u64, title: &str) -> MediaItem {
        MediaItem::new(MediaKind::Movie, id, title)
    }

    #[tokio::test]
    async fn test_toggle_is_symmetric() {
        let store = FavoritesStore::in_memory();
        let item = movie(603, "The Matrix");

        assert!(!store.is_favorite(item.key()).await);
        assert!(store.toggle(&item).await.unwrap());
        assert!(store.is_favorite(item.key()).await);
        assert!(!store.toggle(&item).await.unwrap());
        assert!(!store.is_favorite(item.key()).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_same_id_different_kind_is_separate() {
        let store = FavoritesStore::in_memory();
        let film = movie(1399, "Some Film");
        let show = MediaItem::new(MediaKind::TvShow, 1399, "Game of Thrones");

        store.toggle(&film).await.unwrap();

        assert!(store.is_favorite(film.key()).await);
        assert!(!store.is_favorite(show.key()).await);
        assert_eq!(store.keys().await, HashSet::from([film.key()]));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = FavoritesStore::in_memory();
        store.toggle(&movie(1, "First")).await.unwrap();
        store.toggle(&movie(2, "Second")).await.unwrap();

        let titles: Vec<_> = store
            .list()
            .await
            .into_iter()
            .map(|entry| entry.item.title)
            .collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("favorites.json");

        let store = FavoritesStore::open(&path).await.unwrap();
        store.toggle(&movie(27205, "Inception")).await.unwrap();
        store.toggle(&movie(157336, "Interstellar")).await.unwrap();
        drop(store);

        let reopened = FavoritesStore::open(&path).await.unwrap();
        assert_eq!(reopened.len().await, 2);
        assert!(
            reopened
                .is_favorite(MediaKey::new(MediaKind::Movie, 157336))
                .await
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::open(dir.path().join("absent.json"))
            .await
            .unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let result = FavoritesStore::open(&path).await;
        assert!(matches!(result, Err(FavoritesError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = FavoritesStore::in_memory();
        let item = movie(11, "Star Wars");
        store.toggle(&item).await.unwrap();
        store.toggle(&movie(12, "Finding Nemo")).await.unwrap();

        assert!(store.remove(item.key()).await.unwrap());
        assert!(!store.remove(item.key()).await.unwrap());
        assert_eq!(store.len().await, 1);

        store.clear().await.unwrap();
        assert!(store.is_empty().await);
    }
}
