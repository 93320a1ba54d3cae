//! Reusable HTML components for HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments that can be used
//! in full pages or as HTMX partial updates. All styling uses Tailwind CSS.

pub mod header;
pub mod layout;
pub mod media;
pub mod toast;

// Re-export main component functions
pub use header::{favorites_link, movie_header};
pub use layout::{button, escape, page_header};
pub use media::{MediaCardContext, favorite_button, media_card, media_section};
pub use toast::notification_toast;
