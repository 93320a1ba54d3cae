//! Error types for media search functionality.

use thiserror::Error;

/// Errors that can occur during media search operations.
#[derive(Debug, Clone, Error)]
pub enum MediaSearchError {
    /// Network communication error occurred during search.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to parse search results or response data.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// Search provider returned an error or is unavailable.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },

    /// The search service could not be built from the given configuration.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What is missing or invalid
        reason: String,
    },
}
