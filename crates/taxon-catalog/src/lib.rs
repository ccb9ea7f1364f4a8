//! Taxon Catalog
//!
//! Ordered registry of structural schemas and the validator adapter that
//! compiles and evaluates them.
//!
//! The catalog provides:
//! - Loading (type, schema) pairs in precedence order
//! - Per-entry compilation with non-fatal failure reporting
//! - A swappable handle for installing reloaded catalogs
//! - Built-in profile and user schemas
//!
//! # Examples
//!
//! ```
//! use taxon_catalog::Catalog;
//! use taxon_domain::TypeTag;
//!
//! let catalog = Catalog::load([
//!     (TypeTag::Profile, r#"{"type":"object","required":["user"]}"#),
//!     (TypeTag::User, r#"{"type":"object","required":["username"]}"#),
//! ])?;
//!
//! let report = catalog.compile();
//! assert!(report.is_complete());
//! assert_eq!(report.catalog.tags(), vec![TypeTag::Profile, TypeTag::User]);
//! # Ok::<(), taxon_catalog::SchemaLoadError>(())
//! ```

#![warn(missing_docs)]

mod catalog;
mod error;
mod handle;
mod schema;

pub mod builtin;
pub mod engine;
pub mod source;

pub use catalog::{Catalog, CompileReport, CompiledCatalog, CompiledEntry};
pub use engine::{JsonSchemaEngine, SchemaEngine};
pub use error::{EngineError, SchemaCompileError, SchemaLoadError};
pub use handle::CatalogHandle;
pub use schema::SchemaDocument;
