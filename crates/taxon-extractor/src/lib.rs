//! Taxon Extractor
//!
//! Finds every sub-document of a tree that a target schema accepts, at any
//! depth, including below documents that already matched.
//!
//! # Architecture
//!
//! ```text
//! Document → extract (depth-first, pre-order) → matches → package → Emissions
//! ```
//!
//! The walk itself is [`extract`], a generic function over the
//! [`TreeNode`](taxon_domain::TreeNode) view with an arbitrary predicate.
//! [`extract_matches`] and [`Extractor`] plug a compiled schema in as that
//! predicate.
//!
//! # Example Usage
//!
//! ```
//! use serde_json::json;
//! use taxon_domain::Attributes;
//! use taxon_extractor::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::builtin_user(ExtractorConfig::bundled())?;
//!
//! let feed = json!({
//!     "items": [
//!         {"owner": {"username": "alice", "pk": 1}},
//!         {"owner": {"username": "bob", "pk": 2}}
//!     ]
//! });
//!
//! let emissions = extractor.emit(&feed, &Attributes::new())?;
//! assert_eq!(emissions.len(), 1);
//! assert_eq!(emissions[0].document.as_array().map(Vec::len), Some(2));
//! # Ok::<(), taxon_extractor::ExtractError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod transfer;

pub use config::{ExtractorConfig, DEFAULT_MAX_DEPTH};
pub use error::ExtractError;
pub use extractor::{extract, extract_matches, Extraction, Extractor};
pub use transfer::{package, Emission, TransferMode};
