//! Error types for the CLI application.

use taxon_catalog::{SchemaCompileError, SchemaLoadError};
use taxon_classifier::ClassifyError;
use taxon_extractor::ExtractError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema source could not be loaded
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaLoadError),

    /// Extraction target schema did not compile
    #[error("Schema error: {0}")]
    Compile(#[from] SchemaCompileError),

    /// Classification error
    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Input document is not readable JSON
    #[error("Unparseable document '{input}': {message}")]
    DocumentUnparseable {
        /// Where the document came from
        input: String,
        /// Read or parse failure
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
