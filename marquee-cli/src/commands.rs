//! CLI command implementations

use anyhow::{Context, bail};
use clap::Subcommand;
use marquee_core::{FavoritesStore, MarqueeConfig, MediaItem, RuntimeMode};
use marquee_search::{MediaSearchError, MediaSearchService, SearchKind, SearchResults};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// `development` serves the demo catalog, `production` uses TMDB
        #[arg(long, default_value = "development")]
        mode: RuntimeMode,
    },
    /// Search movies and TV shows
    Search {
        /// Title to look for
        query: String,
        /// Catalog to search: movie, tv or all
        #[arg(short, long, default_value = "all")]
        kind: SearchKind,
        /// `development` searches the demo catalog, `production` uses TMDB
        #[arg(long, default_value = "development")]
        mode: RuntimeMode,
    },
    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

/// Favorites subcommands
#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorites, newest first
    List,
    /// Remove every favorite
    Clear,
}

/// Handle the CLI command
///
/// # Errors
/// Returns the error of whichever command fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = MarqueeConfig::from_env();

    match command {
        Commands::Serve { host, port, mode } => serve(config, host, port, mode).await,
        Commands::Search { query, kind, mode } => search(&config, &query, kind, mode).await,
        Commands::Favorites { action } => favorites(&config, action).await,
    }
}

/// Start the web server
///
/// # Errors
/// - Search service misconfigured for `mode`
/// - Favorites file unreadable or bind failure
pub async fn serve(
    mut config: MarqueeConfig,
    host: Option<String>,
    port: Option<u16>,
    mode: RuntimeMode,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting Marquee in {mode} mode");
    marquee_web::run_server(config, mode).await.map_err(|e| {
        if e.is_user_error() {
            tracing::warn!("Server not started: {e}");
        } else {
            tracing::error!("Server failed: {e}");
        }
        let message = e.user_message();
        anyhow::Error::new(e).context(message)
    })
}

/// Search the catalog and print the results
///
/// # Errors
/// - Search service misconfigured for `mode`
/// - Provider request failed
pub async fn search(
    config: &MarqueeConfig,
    query: &str,
    kind: SearchKind,
    mode: RuntimeMode,
) -> anyhow::Result<()> {
    let service = MediaSearchService::from_config(config, mode)?;
    tracing::debug!("Searching {query:?} with {} provider", service.provider_name());

    if query.trim().is_empty() {
        println!("Nothing to search for.");
        return Ok(());
    }

    let total = run_search(&service, query, kind).await?;
    if total == 0 {
        println!("No results found for \"{}\"", query.trim());
    } else {
        println!("Found {total} results for \"{}\"", query.trim());
    }
    Ok(())
}

/// Runs the searches `kind` asks for and prints each section.
///
/// Searching both catalogs runs them concurrently. A failing side is reported
/// and skipped; the command only fails when every requested search failed.
async fn run_search(
    service: &MediaSearchService,
    query: &str,
    kind: SearchKind,
) -> anyhow::Result<usize> {
    let (movies, tv) = match kind {
        SearchKind::All => {
            let combined = service.search_all(query).await;
            (Some(combined.movies), Some(combined.tv))
        }
        SearchKind::Movie => (Some(service.search_movies(query).await), None),
        SearchKind::Tv => (None, Some(service.search_tv_shows(query).await)),
    };

    let mut total = 0;
    let mut failures = Vec::new();
    for (title, outcome) in [("Movies", movies), ("TV Shows", tv)] {
        match outcome {
            Some(Ok(results)) => {
                total += results.len();
                print_section(title, &results);
            }
            Some(Err(e)) => {
                report_failure(title, &e);
                failures.push(e);
            }
            None => {}
        }
    }

    let requested = usize::from(kind.includes_movies()) + usize::from(kind.includes_tv());
    if failures.len() == requested {
        bail!("Search failed: {}", failures[0]);
    }
    Ok(total)
}

fn report_failure(title: &str, error: &MediaSearchError) {
    tracing::warn!("{title} search failed: {error}");
    eprintln!("{title} search failed: {error}");
}

/// List or clear favorites
///
/// # Errors
/// - Favorites file could not be read or written
pub async fn favorites(config: &MarqueeConfig, action: FavoritesAction) -> anyhow::Result<()> {
    let path = &config.favorites.storage_path;
    let store = FavoritesStore::open(path)
        .await
        .with_context(|| format!("Failed to open favorites at {}", path.display()))?;

    match action {
        FavoritesAction::List => {
            let entries = store.list().await;
            if entries.is_empty() {
                println!("No favorites yet.");
                return Ok(());
            }

            println!("Favorites ({})", entries.len());
            println!("{:-<60}", "");
            for entry in entries {
                println!(
                    "{}  (added {})",
                    describe(&entry.item),
                    entry.added_at.format("%Y-%m-%d")
                );
            }
        }
        FavoritesAction::Clear => {
            let count = store.len().await;
            store.clear().await?;
            println!("Removed {count} favorites.");
        }
    }

    Ok(())
}

fn print_section(title: &str, results: &SearchResults) {
    if results.is_empty() {
        return;
    }

    println!("{title} ({})", results.len());
    println!("{:-<60}", "");
    for item in &results.results {
        println!("  {}", describe(item));
    }
    println!();
}

fn describe(item: &MediaItem) -> String {
    let mut line = format!("[{}] {}", item.key(), item.title);
    if let Some(year) = item.year() {
        line.push_str(&format!(" ({year})"));
    }
    if let Some(rating) = item.display_rating() {
        line.push_str(&format!(" ★ {rating}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use marquee_core::MediaKind;
    use marquee_search::MockProvider;

    use super::*;

    #[tokio::test]
    async fn test_search_all_keeps_tv_when_movies_fail() {
        let mock = Arc::new(MockProvider::with_sample_data().failing_movies());
        let service = MediaSearchService::new(mock.clone());

        let total = run_search(&service, "mock", SearchKind::All).await.unwrap();

        assert_eq!(total, 1);
        assert_eq!(mock.call_count(MediaKind::Movie), 1);
        assert_eq!(mock.call_count(MediaKind::TvShow), 1);
    }

    #[tokio::test]
    async fn test_search_fails_when_every_requested_side_fails() {
        let mock = Arc::new(MockProvider::with_sample_data().failing_movies().failing_tv());
        let service = MediaSearchService::new(mock);

        assert!(run_search(&service, "mock", SearchKind::All).await.is_err());
    }

    #[tokio::test]
    async fn test_single_kind_only_searches_that_catalog() {
        let mock = Arc::new(MockProvider::with_sample_data().failing_movies());
        let service = MediaSearchService::new(mock.clone());

        let total = run_search(&service, "mock", SearchKind::Tv).await.unwrap();

        assert_eq!(total, 1);
        assert_eq!(mock.call_count(MediaKind::Movie), 0);
        assert!(run_search(&service, "mock", SearchKind::Movie).await.is_err());
    }

    #[test]
    fn test_describe_includes_year_and_rating() {
        let item = MediaItem {
            release_date: NaiveDate::from_ymd_opt(2008, 7, 16),
            vote_average: Some(8.5),
            ..MediaItem::new(MediaKind::Movie, 155, "The Dark Knight")
        };

        assert_eq!(describe(&item), "[movie-155] The Dark Knight (2008) ★ 8.5");
        assert_eq!(
            describe(&MediaItem::new(MediaKind::TvShow, 1, "Untitled")),
            "[tv-1] Untitled"
        );
    }
}
