//! Site header with quick search, favorites and sign-in controls

/// Renders the top navigation header.
///
/// The quick-search box submits to `/search?q=`, the favorites button links
/// to `/favorites`, and the sign-in button is present but has no action yet.
pub fn movie_header(favorites_count: usize) -> String {
    let favorites = favorites_link(favorites_count, false);

    format!(
        r#"<header class="sticky top-0 z-50 bg-movie-darker/95 border-b border-gray-800 backdrop-blur">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16 gap-6">
                    <a href="/" class="text-2xl font-bold text-movie-primary">Marquee</a>

                    <form action="/search" method="get" role="search" class="hidden md:block flex-1 max-w-md">
                        <input type="text" name="q" placeholder="Quick search..." aria-label="Quick search"
                               class="w-full px-4 py-2 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-movie-primary" />
                    </form>

                    <nav class="flex items-center space-x-3">
                        {favorites}
                        <button type="button" class="px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:text-white hover:bg-gray-700">Sign In</button>
                    </nav>
                </div>
            </div>
        </header>"#
    )
}

/// Renders the favorites link with its count badge.
///
/// Sent out of band after a toggle so the header count stays current.
pub fn favorites_link(favorites_count: usize, out_of_band: bool) -> String {
    let badge = if favorites_count > 0 {
        format!(
            r#"<span class="ml-2 rounded-full bg-movie-primary px-2 text-xs text-white">{favorites_count}</span>"#
        )
    } else {
        String::new()
    };
    let oob = if out_of_band {
        r#" hx-swap-oob="true""#
    } else {
        ""
    };

    format!(
        r#"<a href="/favorites" id="favorites-link"{oob} class="flex items-center px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:text-white hover:bg-gray-700">Favorites{badge}</a>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_links_and_badge() {
        let html = movie_header(3);
        assert!(html.contains(r#"action="/search""#));
        assert!(html.contains(r#"href="/favorites""#));
        assert!(html.contains(">3</span>"));
        assert!(html.contains("Sign In"));

        assert!(!movie_header(0).contains("rounded-full"));
    }

    #[test]
    fn test_favorites_link_out_of_band() {
        let html = favorites_link(1, true);
        assert!(html.contains(r#"id="favorites-link" hx-swap-oob="true""#));
        assert!(!favorites_link(1, false).contains("hx-swap-oob"));
    }
}
