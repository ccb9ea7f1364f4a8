//! Taxon Domain Layer
//!
//! Core vocabulary shared by every Taxon crate: the closed set of semantic
//! types a document can be classified into, the read-only tree view the
//! classifier and extractor walk, and the ordered attribute map attached to
//! results.
//!
//! ## Key Concepts
//!
//! - **TypeTag**: A semantic category with a stable label and route name
//! - **TreeNode**: A `Scalar | Array | Object` view over a parsed document
//! - **Attributes**: Insertion-ordered key/value metadata for a result
//!
//! ## Architecture
//!
//! This crate holds no catalog, validator, or I/O logic. Its only dependency
//! is `serde_json`, whose `Value` is the concrete document representation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attributes;
pub mod node;
pub mod type_tag;

// Re-exports for convenience
pub use attributes::Attributes;
pub use node::{NodeKind, TreeNode};
pub use type_tag::TypeTag;

/// Attribute key carrying the resolved type label
pub const SCHEME_TYPE_ATTRIBUTE: &str = "scheme.type";

/// Attribute key carrying the JSON text of the schema that matched
pub const SCHEME_JSON_ATTRIBUTE: &str = "scheme.json";
