//! Error types for catalog construction and schema compilation

use std::path::PathBuf;
use taxon_domain::TypeTag;
use thiserror::Error;

/// Errors that abort catalog construction
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    /// Schema text is not valid JSON
    #[error("Invalid JSON in schema for '{tag}': {message}")]
    InvalidJson {
        /// Label of the entry being loaded
        tag: String,
        /// Parser message
        message: String,
    },

    /// Schema JSON is neither an object nor a boolean
    #[error("Schema for '{tag}' is not a schema document (expected an object or boolean, found {found})")]
    NotASchema {
        /// Label of the entry being loaded
        tag: String,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// Two entries target the same type
    #[error("Duplicate catalog entry for '{0}'")]
    DuplicateTag(TypeTag),

    /// An entry targets the fallback type
    #[error("'{}' is the fallback type and cannot carry a schema", TypeTag::Unknown.label())]
    ReservedTag,

    /// Source file is not in the expected shape
    #[error("Malformed schema source: {0}")]
    MalformedSource(String),

    /// Source file could not be read
    #[error("Failed to read schema source {path}: {source}")]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Failure to compile one schema entry
///
/// Non-fatal: the entry is excluded from the compiled catalog and
/// classification continues against the remaining entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Schema for '{tag}' failed to compile: {cause}")]
pub struct SchemaCompileError {
    /// Type whose schema failed
    pub tag: TypeTag,
    /// Engine message
    pub cause: String,
}

/// Error reported by a schema engine while compiling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EngineError(pub String);
