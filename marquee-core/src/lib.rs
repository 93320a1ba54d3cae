//! Marquee Core - Shared building blocks for the Marquee media browser
//!
//! This crate provides configuration, runtime mode selection, tracing setup,
//! the media domain types shared by search and web, and the favorites store.

pub mod config;
pub mod favorites;
pub mod media;
pub mod mode;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::MarqueeConfig;
pub use favorites::{FavoriteEntry, FavoritesError, FavoritesStore};
pub use media::{MediaItem, MediaKey, MediaKind};
pub use mode::RuntimeMode;

/// Core errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Favorites error: {0}")]
    Favorites(#[from] FavoritesError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Favorites(FavoritesError::Corrupt { path, .. }) => {
                format!("Favorites file {} is unreadable", path.display())
            }
            MarqueeError::Favorites(_) => "Could not save favorites".to_string(),
            MarqueeError::Configuration { reason } => format!("Configuration error: {reason}"),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input or setup rather than a fault.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MarqueeError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
