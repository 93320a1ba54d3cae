//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses. Every page shares
//! the base layout below with HTMX and Tailwind CSS.

use axum::response::Html;

use crate::components::{escape, movie_header};

pub mod favorites;
pub mod search;

// Re-export page handlers
pub use favorites::favorites_page;
pub use search::{SearchParams, SearchView, search_page};

/// Wraps page content in the shared document layout.
pub fn render_page(title: &str, favorites_count: usize, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'movie-primary': '#e50914',
                                'movie-darker': '#0b0b0f',
                                'movie-light': '#f5f5f1'
                            }}
                        }}
                    }}
                }}
            </script>
            <link rel="stylesheet" href="/static/css/marquee.css">
        </head>
        <body class="bg-movie-darker text-white min-h-screen font-sans">
            {}

            <main class="container mx-auto px-4 py-8">
                {}
            </main>

            <div id="toast-area" class="fixed top-20 right-4 space-y-2 z-50" aria-live="polite"></div>
        </body>
        </html>"#,
        escape(title),
        movie_header(favorites_count),
        content
    );

    Html(html)
}
