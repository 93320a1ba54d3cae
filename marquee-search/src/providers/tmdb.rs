//! TMDB v3 search API provider.

use async_trait::async_trait;
use chrono::NaiveDate;
use marquee_core::config::CatalogConfig;
use marquee_core::{MediaItem, MediaKind};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::MediaProvider;
use crate::Result;
use crate::errors::MediaSearchError;
use crate::types::SearchResults;

/// Provider backed by `GET /search/movie` and `GET /search/tv`.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    language: String,
    include_adult: bool,
}

/// Paged envelope shared by both TMDB search endpoints.
#[derive(Debug, Deserialize)]
struct TmdbPage<T> {
    page: u32,
    results: Vec<T>,
    total_results: u32,
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: u64,
    title: String,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
    vote_count: Option<u32>,
    original_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbTvShow {
    id: u64,
    name: String,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f32>,
    vote_count: Option<u32>,
    original_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    status_message: Option<String>,
}

/// Converts a TMDB wire record into the shared media type.
trait IntoMediaItem {
    fn into_media_item(self) -> MediaItem;
}

impl IntoMediaItem for TmdbMovie {
    fn into_media_item(self) -> MediaItem {
        MediaItem {
            id: self.id,
            kind: MediaKind::Movie,
            title: self.title,
            overview: non_empty(self.overview),
            poster_path: non_empty(self.poster_path),
            backdrop_path: non_empty(self.backdrop_path),
            release_date: parse_date(self.release_date.as_deref()),
            vote_average: self.vote_average,
            vote_count: self.vote_count.unwrap_or(0),
            original_language: non_empty(self.original_language),
        }
    }
}

impl IntoMediaItem for TmdbTvShow {
    fn into_media_item(self) -> MediaItem {
        MediaItem {
            id: self.id,
            kind: MediaKind::TvShow,
            title: self.name,
            overview: non_empty(self.overview),
            poster_path: non_empty(self.poster_path),
            backdrop_path: non_empty(self.backdrop_path),
            release_date: parse_date(self.first_air_date.as_deref()),
            vote_average: self.vote_average,
            vote_count: self.vote_count.unwrap_or(0),
            original_language: non_empty(self.original_language),
        }
    }
}

impl<T: IntoMediaItem> TmdbPage<T> {
    fn into_results(self) -> SearchResults {
        SearchResults {
            page: self.page,
            results: self
                .results
                .into_iter()
                .map(IntoMediaItem::into_media_item)
                .collect(),
            total_results: self.total_results,
            total_pages: self.total_pages,
        }
    }
}

impl TmdbProvider {
    /// Creates a TMDB provider from catalog configuration.
    ///
    /// # Errors
    /// - `MediaSearchError::Configuration` - No API key configured or HTTP client setup failed
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| MediaSearchError::Configuration {
                reason: "TMDB_API_KEY is required in production mode".to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| MediaSearchError::Configuration {
                reason: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
            include_adult: config.include_adult,
        })
    }

    /// Builds the request URL for a search against `kind`.
    fn search_url(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> Result<Url> {
        let endpoint = format!("{}/search/{}", self.api_base, kind.as_str());
        let mut url = Url::parse(&endpoint).map_err(|e| MediaSearchError::Configuration {
            reason: format!("Invalid TMDB base URL '{}': {e}", self.api_base),
        })?;

        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("query", query)
            .append_pair("page", &page.max(1).to_string())
            .append_pair("language", &self.language)
            .append_pair("include_adult", &self.include_adult.to_string());

        Ok(url)
    }

    async fn fetch(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> Result<String> {
        let url = self.search_url(kind, query, page)?;
        tracing::debug!("TMDB {} search: query={query:?} page={page}", kind.as_str());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaSearchError::NetworkError {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MediaSearchError::NetworkError {
                reason: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        Ok(body)
    }
}

#[async_trait]
impl MediaProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults> {
        let body = self.fetch(MediaKind::Movie, query, page).await?;
        parse_page::<TmdbMovie>(&body)
    }

    async fn search_tv_shows(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults> {
        let body = self.fetch(MediaKind::TvShow, query, page).await?;
        parse_page::<TmdbTvShow>(&body)
    }
}

fn parse_page<T>(body: &str) -> Result<SearchResults>
where
    T: for<'de> Deserialize<'de> + IntoMediaItem,
{
    serde_json::from_str::<TmdbPage<T>>(body)
        .map(TmdbPage::into_results)
        .map_err(|e| MediaSearchError::ParseError {
            reason: format!("JSON parsing failed: {e}"),
        })
}

fn status_error(status: StatusCode, body: &str) -> MediaSearchError {
    let message = serde_json::from_str::<TmdbErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

    let reason = if status == StatusCode::UNAUTHORIZED {
        format!("TMDB rejected the API key: {message}")
    } else {
        format!("TMDB returned {status}: {message}")
    };

    MediaSearchError::ProviderError { reason }
}

/// TMDB sends "" for unknown dates.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
