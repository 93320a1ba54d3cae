//! Demo provider implementation for development and testing.

use async_trait::async_trait;
use chrono::NaiveDate;
use marquee_core::{MediaItem, MediaKind};
use strsim::jaro_winkler;

use super::MediaProvider;
use crate::Result;
use crate::types::SearchResults;

/// Minimum Jaro-Winkler similarity for a fuzzy (non-substring) match.
const FUZZY_THRESHOLD: f64 = 0.85;

/// (id, title, first release date, rating, vote count, overview)
type CatalogRow = (u64, &'static str, &'static str, f32, u32, &'static str);

const MOVIES: &[CatalogRow] = &[
    (603, "The Matrix", "1999-03-31", 8.2, 25_600, "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers."),
    (27205, "Inception", "2010-07-15", 8.4, 36_800, "A thief who steals corporate secrets through dream-sharing technology is given the inverse task of planting an idea into the mind of a CEO."),
    (157336, "Interstellar", "2014-11-05", 8.4, 35_400, "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival."),
    (438631, "Dune", "2021-09-15", 7.8, 12_100, "Paul Atreides travels to the most dangerous planet in the universe to ensure the future of his family and his people."),
    (693134, "Dune: Part Two", "2024-02-27", 8.2, 6_200, "Paul Atreides unites with the Fremen while on a path of revenge against the conspirators who destroyed his family."),
    (78, "Blade Runner", "1982-06-25", 7.9, 14_000, "A blade runner must pursue and terminate four replicants who stole a ship in space and returned to Earth seeking their creator."),
    (335984, "Blade Runner 2049", "2017-10-04", 7.5, 13_500, "A young blade runner's discovery of a long-buried secret leads him to track down former blade runner Rick Deckard."),
    (155, "The Dark Knight", "2008-07-16", 8.5, 32_700, "Batman raises the stakes in his war on crime as the Joker unleashes chaos on Gotham."),
    (129, "Spirited Away", "2001-07-20", 8.5, 16_400, "A young girl wanders into a world ruled by gods, witches and spirits, where humans are changed into beasts."),
    (348, "Alien", "1979-05-25", 8.1, 14_900, "The crew of a commercial spacecraft encounters a deadly lifeform after investigating an unknown transmission."),
    (329865, "Arrival", "2016-11-10", 7.6, 18_000, "A linguist works with the military to communicate with alien lifeforms after twelve mysterious spacecraft appear around the world."),
    (496243, "Parasite", "2019-05-30", 8.5, 18_600, "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan."),
];

const TV_SHOWS: &[CatalogRow] = &[
    (1396, "Breaking Bad", "2008-01-20", 8.9, 14_000, "A high school chemistry teacher diagnosed with terminal lung cancer turns to manufacturing methamphetamine."),
    (1399, "Game of Thrones", "2011-04-17", 8.5, 24_500, "Seven noble families fight for control of the mythical land of Westeros."),
    (66732, "Stranger Things", "2016-07-15", 8.6, 18_300, "When a young boy vanishes, a small town uncovers a mystery involving secret experiments and terrifying supernatural forces."),
    (2316, "The Office", "2005-03-24", 8.6, 4_500, "The everyday lives of office employees in the Scranton branch of the Dunder Mifflin Paper Company."),
    (70523, "Dark", "2017-12-01", 8.4, 6_600, "A missing child sets four families on a frantic hunt for answers as they unearth a mind-bending mystery spanning three generations."),
    (95396, "Severance", "2022-02-17", 8.4, 2_100, "Mark leads a team of office workers whose memories have been surgically divided between their work and personal lives."),
    (82856, "The Mandalorian", "2019-11-12", 8.4, 9_800, "After the fall of the Galactic Empire, a lone gunfighter makes his way through the outer reaches of the lawless galaxy."),
    (87108, "Chernobyl", "2019-05-06", 8.7, 5_900, "The true story of one of the worst man-made catastrophes in history and the people who sacrificed to save Europe."),
];

/// Demo provider for development and testing.
///
/// Serves a small built-in catalog without external API calls so the search
/// UI can be exercised offline. Matching is case-insensitive substring first,
/// then fuzzy similarity against the title and each of its words.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a demo provider.
    pub fn new() -> Self {
        Self
    }

    fn search(&self, kind: MediaKind, query: &str, page: u32) -> SearchResults {
        if page > 1 {
            return SearchResults {
                page,
                ..SearchResults::empty()
            };
        }

        let rows = match kind {
            MediaKind::Movie => MOVIES,
            MediaKind::TvShow => TV_SHOWS,
        };

        let mut scored: Vec<(f64, MediaItem)> = rows
            .iter()
            .filter_map(|row| match_score(row.1, query).map(|score| (score, to_item(kind, row))))
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b.total_cmp(score_a).then_with(|| {
                b.vote_average
                    .unwrap_or(0.0)
                    .total_cmp(&a.vote_average.unwrap_or(0.0))
            })
        });

        SearchResults::single_page(scored.into_iter().map(|(_, item)| item).collect())
    }
}

#[async_trait]
impl MediaProvider for DemoProvider {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults> {
        Ok(self.search(MediaKind::Movie, query, page))
    }

    async fn search_tv_shows(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults> {
        Ok(self.search(MediaKind::TvShow, query, page))
    }
}

/// Scores `title` against `query`. Substring hits always outrank fuzzy ones,
/// and shorter titles outrank longer ones for the same substring.
fn match_score(title: &str, query: &str) -> Option<f64> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let title = title.to_lowercase();
    if title.contains(&query) {
        return Some(1.0 + query.len() as f64 / title.len() as f64);
    }

    let best = std::iter::once(title.as_str())
        .chain(title.split_whitespace())
        .map(|candidate| jaro_winkler(candidate, &query))
        .fold(0.0, f64::max);

    (best >= FUZZY_THRESHOLD).then_some(best)
}

fn to_item(kind: MediaKind, row: &CatalogRow) -> MediaItem {
    let (id, title, date, rating, votes, overview) = *row;
    MediaItem {
        overview: Some(overview.to_string()),
        release_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        vote_average: Some(rating),
        vote_count: votes,
        original_language: Some("en".to_string()),
        ..MediaItem::new(kind, id, title)
    }
}
