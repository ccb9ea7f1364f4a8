//! Taxon Classifier
//!
//! Assigns each document a single semantic type from an ordered schema
//! catalog, then refines types whose schema covers several wire shapes.
//!
//! # Architecture
//!
//! ```text
//! Document → classify (first match in catalog order) → disambiguate → ClassificationResult
//! ```
//!
//! Classification is first-match-wins, not best-match: schemas may overlap,
//! and the entry registered earlier always takes the document.
//!
//! # Example Usage
//!
//! ```
//! use serde_json::json;
//! use taxon_catalog::Catalog;
//! use taxon_classifier::{classify, disambiguate};
//! use taxon_domain::TypeTag;
//!
//! let catalog = Catalog::load([
//!     (TypeTag::Profile, r#"{"type":"object","minProperties":1}"#),
//! ])?
//! .compile()
//! .catalog;
//!
//! let doc = json!({"user": {"username": "bob"}});
//! let tag = classify(&doc, &catalog);
//! assert_eq!(tag, TypeTag::Profile);
//! assert_eq!(disambiguate(&doc, tag), (TypeTag::Profile, "profile-api-info:id"));
//!
//! // Accepted by the loose schema, but carries no known profile wrapper
//! let doc = json!({"other": {}});
//! assert_eq!(disambiguate(&doc, classify(&doc, &catalog)).0, TypeTag::Unknown);
//! # Ok::<(), taxon_catalog::SchemaLoadError>(())
//! ```

#![warn(missing_docs)]

mod branching;
mod classifier;
mod config;
mod disambiguator;
mod error;
mod metrics;
mod result;

pub use branching::Branching;
pub use classifier::{classify, classify_and_disambiguate, first_match};
pub use config::ClassifierConfig;
pub use disambiguator::{disambiguate, ProfileVariant};
pub use error::ClassifyError;
pub use metrics::ClassifierMetrics;
pub use result::ClassificationResult;
