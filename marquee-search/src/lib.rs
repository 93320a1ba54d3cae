//! Marquee Search - Movie and TV discovery

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Provides movie and TV show search against the TMDB API or an offline demo
//! catalog, with a small response cache in front of either.

pub mod cache;
pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::MediaSearchError;
#[cfg(any(test, feature = "test-utils"))]
pub use providers::MockProvider;
pub use providers::{DemoProvider, MediaProvider, TmdbProvider};
pub use service::MediaSearchService;
pub use types::{CombinedResults, SearchKind, SearchResults};

/// Convenience type alias for Results with MediaSearchError.
pub type Result<T> = std::result::Result<T, MediaSearchError>;
