//! Media components - result sections, cards, favorite toggles

use std::collections::HashSet;

use marquee_core::{MediaItem, MediaKey};

use super::layout::{button, escape};

/// What a card needs to know beyond the item itself.
pub struct MediaCardContext<'a> {
    /// Base URL prepended to poster paths
    pub image_base_url: &'a str,
    /// Keys of the user's current favorites
    pub favorites: &'a HashSet<MediaKey>,
}

impl MediaCardContext<'_> {
    fn is_favorite(&self, item: &MediaItem) -> bool {
        self.favorites.contains(&item.key())
    }
}

/// Renders a titled grid of media cards.
///
/// A section that is still loading is dimmed and marked busy.
pub fn media_section(
    title: &str,
    items: &[MediaItem],
    context: &MediaCardContext,
    loading: bool,
) -> String {
    let cards: String = items.iter().map(|item| media_card(item, context)).collect();
    let busy_class = if loading { " opacity-50" } else { "" };

    format!(
        r#"<section class="mb-12{busy_class}" aria-busy="{loading}">
            <h2 class="text-2xl font-semibold text-white mb-6">{}</h2>
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-6">
                {cards}
            </div>
        </section>"#,
        escape(title)
    )
}

/// Renders a single poster card with play and favorite controls.
pub fn media_card(item: &MediaItem, context: &MediaCardContext) -> String {
    let title = escape(&item.title);

    let poster = match &item.poster_path {
        Some(path) => format!(
            r#"<img src="{}" alt="{title}" loading="lazy" class="w-full h-full object-cover" />"#,
            escape(&format!(
                "{}{}",
                context.image_base_url.trim_end_matches('/'),
                path
            ))
        ),
        None => r#"<div class="w-full h-full flex items-center justify-center text-gray-500 text-sm">No Image</div>"#
            .to_string(),
    };

    let mut details = Vec::new();
    if let Some(year) = item.year() {
        details.push(year.to_string());
    }
    if let Some(rating) = item.display_rating() {
        details.push(format!("★ {rating}"));
    }

    let play_form = format!(
        r##"<form hx-post="/htmx/play" hx-target="#toast-area" hx-swap="innerHTML">
                <input type="hidden" name="title" value="{title}" />
                {}
            </form>"##,
        button("▶ Play", "primary", Some(r#"type="submit""#))
    );

    format!(
        r#"<article class="group bg-movie-light/5 rounded-lg overflow-hidden border border-gray-800 hover:border-gray-600 transition-colors" data-media-key="{}">
            <div class="aspect-[2/3] bg-gray-800">{poster}</div>
            <div class="p-3 space-y-2">
                <h3 class="text-white font-medium truncate" title="{title}">{title}</h3>
                <p class="text-gray-400 text-sm">{}</p>
                <div class="flex items-center justify-between">
                    {play_form}
                    {}
                </div>
            </div>
        </article>"#,
        item.key(),
        details.join(" • "),
        favorite_button(item, context.is_favorite(item))
    )
}

/// Renders the favorite toggle for `item`.
///
/// The form carries a snapshot of the item so the server can store it
/// without another catalog lookup, and replaces itself with the response.
pub fn favorite_button(item: &MediaItem, is_favorite: bool) -> String {
    let hidden = |name: &str, value: &str| {
        format!(
            r#"<input type="hidden" name="{name}" value="{}" />"#,
            escape(value)
        )
    };

    let mut fields = vec![
        hidden("kind", item.kind.as_str()),
        hidden("id", &item.id.to_string()),
        hidden("title", &item.title),
        hidden("vote_count", &item.vote_count.to_string()),
    ];
    if let Some(overview) = &item.overview {
        fields.push(hidden("overview", overview));
    }
    if let Some(poster_path) = &item.poster_path {
        fields.push(hidden("poster_path", poster_path));
    }
    if let Some(backdrop_path) = &item.backdrop_path {
        fields.push(hidden("backdrop_path", backdrop_path));
    }
    if let Some(date) = item.release_date {
        fields.push(hidden("release_date", &date.format("%Y-%m-%d").to_string()));
    }
    if let Some(rating) = item.vote_average {
        fields.push(hidden("vote_average", &rating.to_string()));
    }
    if let Some(language) = &item.original_language {
        fields.push(hidden("original_language", language));
    }

    let (icon, label, color) = if is_favorite {
        ("♥", "Remove from favorites", "text-red-500")
    } else {
        ("♡", "Add to favorites", "text-gray-400 hover:text-red-400")
    };

    format!(
        r#"<form hx-post="/htmx/favorites/toggle" hx-target="this" hx-swap="outerHTML" class="favorite-toggle">
            {}
            <button type="submit" class="text-xl {color}" title="{label}" aria-label="{label}" aria-pressed="{is_favorite}">{icon}</button>
        </form>"#,
        fields.join("")
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use marquee_core::MediaKind;

    use super::*;

    fn sample() -> MediaItem {
        MediaItem {
            poster_path: Some("/poster.jpg".to_string()),
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31),
            vote_average: Some(8.2),
            ..MediaItem::new(MediaKind::Movie, 603, "The <Matrix>")
        }
    }

    #[test]
    fn test_card_renders_poster_details_and_escapes_title() {
        let favorites = HashSet::new();
        let context = MediaCardContext {
            image_base_url: "https://img.example/w500/",
            favorites: &favorites,
        };

        let html = media_card(&sample(), &context);

        assert!(html.contains(r#"src="https://img.example/w500/poster.jpg""#));
        assert!(html.contains("1999 • ★ 8.2"));
        assert!(html.contains("The &lt;Matrix&gt;"));
        assert!(!html.contains("The <Matrix>"));
        assert!(html.contains(r#"data-media-key="movie-603""#));
    }

    #[test]
    fn test_card_without_poster_uses_placeholder() {
        let favorites = HashSet::new();
        let context = MediaCardContext {
            image_base_url: "https://img.example",
            favorites: &favorites,
        };
        let item = MediaItem::new(MediaKind::TvShow, 1, "Unknown Show");

        assert!(media_card(&item, &context).contains("No Image"));
    }

    #[test]
    fn test_favorite_button_reflects_state() {
        let item = sample();

        let on = favorite_button(&item, true);
        assert!(on.contains("♥"));
        assert!(on.contains(r#"aria-pressed="true""#));

        let off = favorite_button(&item, false);
        assert!(off.contains("♡"));
        assert!(off.contains(r#"name="release_date" value="1999-03-31""#));
        assert!(!off.contains(r#"name="overview""#));
    }

    #[test]
    fn test_section_marks_favorites() {
        let item = sample();
        let favorites = HashSet::from([item.key()]);
        let context = MediaCardContext {
            image_base_url: "",
            favorites: &favorites,
        };

        let html = media_section("Movies", &[item], &context, false);
        assert!(html.contains(">Movies</h2>"));
        assert!(html.contains(r#"aria-pressed="true""#));
    }
}
