//! Error types for the Classifier

use thiserror::Error;

/// Errors that can occur during classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Classification was attempted before any catalog was installed
    #[error("No schema catalog loaded")]
    NoCatalogLoaded,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
