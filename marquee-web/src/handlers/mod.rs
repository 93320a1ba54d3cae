//! HTTP request handlers organized by functionality

pub mod api;

// Re-export handler functions
pub use api::{ApiSearchQuery, api_favorites, api_search};
