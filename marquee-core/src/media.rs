//! Media domain types shared by search, favorites and the web UI.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Kind of media a catalog entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    TvShow,
}

impl MediaKind {
    /// Path segment used by the catalog API and in form payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::TvShow => "tv",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaKind::Movie),
            "tv" | "tv_show" | "show" | "shows" => Ok(MediaKind::TvShow),
            _ => Err(format!("Invalid media kind: '{s}'")),
        }
    }
}

/// Identity of a catalog entry. Movie and TV ids live in separate namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaKey {
    pub kind: MediaKind,
    pub id: u64,
}

impl MediaKey {
    pub fn new(kind: MediaKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl std::fmt::Display for MediaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}

/// A movie or TV show as returned by a catalog search.
///
/// Movies carry a `title` and TV shows a `name` upstream; both are
/// normalized into [`MediaItem::title`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// Release date for movies, first air date for TV shows
    pub release_date: Option<NaiveDate>,
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: u32,
    pub original_language: Option<String>,
}

impl MediaItem {
    /// Creates an item with only the identifying fields set.
    pub fn new(kind: MediaKind, id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
            vote_count: 0,
            original_language: None,
        }
    }

    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.kind, self.id)
    }

    pub fn year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }

    /// Rating rounded to one decimal for display, if the item has votes.
    pub fn display_rating(&self) -> Option<String> {
        self.vote_average
            .filter(|rating| *rating > 0.0)
            .map(|rating| format!("{rating:.1}"))
    }
}
