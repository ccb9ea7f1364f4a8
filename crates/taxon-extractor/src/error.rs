//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Document nesting went deeper than the configured guard
    #[error("Maximum nesting depth exceeded (limit: {limit})")]
    MaxDepthExceeded {
        /// Configured depth limit
        limit: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
