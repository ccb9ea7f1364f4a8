//! First-match-wins classification against an ordered catalog

use crate::disambiguator::disambiguate;
use crate::{ClassificationResult, ClassifierConfig};
use serde_json::Value;
use taxon_catalog::{CompiledCatalog, CompiledEntry, SchemaEngine};
use taxon_domain::{Attributes, TypeTag, SCHEME_JSON_ATTRIBUTE, SCHEME_TYPE_ATTRIBUTE};
use tracing::debug;

/// First catalog entry, in precedence order, whose schema accepts `doc`
pub fn first_match<'c, E: SchemaEngine>(
    doc: &Value,
    catalog: &'c CompiledCatalog<E>,
) -> Option<&'c CompiledEntry<E::Compiled>> {
    catalog
        .entries()
        .iter()
        .find(|entry| catalog.accepts(entry, doc))
}

/// Classify a document against a compiled catalog
///
/// Entries are tried in insertion order and the first schema that accepts
/// the document decides. Returns `Unknown` when nothing accepts it.
pub fn classify<E: SchemaEngine>(doc: &Value, catalog: &CompiledCatalog<E>) -> TypeTag {
    match first_match(doc, catalog) {
        Some(entry) => {
            debug!(tag = %entry.tag(), uri = entry.document().uri(), "Schema accepted document");
            entry.tag()
        }
        None => {
            debug!("No schema accepted document");
            TypeTag::Unknown
        }
    }
}

/// Classify, disambiguate, and build the result attributes
///
/// With `allow_set_scheme`, a matched result carries `scheme.json` (the
/// accepting schema) and `scheme.type` (the final label). A document no
/// schema accepts gets no attributes.
pub fn classify_and_disambiguate<E: SchemaEngine>(
    doc: &Value,
    catalog: &CompiledCatalog<E>,
    config: &ClassifierConfig,
) -> ClassificationResult {
    let Some(entry) = first_match(doc, catalog) else {
        return ClassificationResult::unmatched();
    };

    let matched = entry.tag();
    let (tag, label) = disambiguate(doc, matched);

    let mut attributes = Attributes::new();
    if config.allow_set_scheme {
        attributes.insert(SCHEME_JSON_ATTRIBUTE, entry.document().text());
        attributes.insert(SCHEME_TYPE_ATTRIBUTE, label);
    }

    debug!(matched = %matched, tag = %tag, label, "Classified document");

    ClassificationResult {
        matched,
        tag,
        label: (label != tag.label()).then_some(label),
        attributes,
    }
}
