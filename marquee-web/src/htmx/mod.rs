//! HTMX partial update handlers
//!
//! Server-rendered HTML fragments swapped into the page by HTMX.

pub mod favorites;
pub mod playback;
pub mod search;

// Re-export main HTMX handlers
pub use favorites::{FavoriteForm, toggle_favorite};
pub use playback::{PlayForm, play_item};
pub use search::search_results;
