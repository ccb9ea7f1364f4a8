//! Ordered schema catalog and its compiled form

use crate::engine::{JsonSchemaEngine, SchemaEngine};
use crate::{SchemaCompileError, SchemaDocument, SchemaLoadError};
use serde_json::Value;
use std::sync::Arc;
use taxon_domain::TypeTag;
use tracing::{info, warn};

/// Ordered registry of (type, schema) pairs
///
/// Insertion order is precedence order: when two schemas accept the same
/// document, the one registered first wins. Each type appears at most once
/// and `Unknown` never carries a schema.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Arc<SchemaDocument>>,
}

impl Catalog {
    /// Load a catalog from (type, schema text) pairs, in precedence order
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose text is not a schema document, on a
    /// repeated type, or on an entry for `Unknown`.
    pub fn load<I, S>(entries: I) -> Result<Self, SchemaLoadError>
    where
        I: IntoIterator<Item = (TypeTag, S)>,
        S: AsRef<str>,
    {
        let documents = entries
            .into_iter()
            .map(|(tag, text)| SchemaDocument::parse(tag, text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_documents(documents)
    }

    /// Load a catalog from (type, parsed schema) pairs, in precedence order
    pub fn from_values<I>(entries: I) -> Result<Self, SchemaLoadError>
    where
        I: IntoIterator<Item = (TypeTag, Value)>,
    {
        let documents = entries
            .into_iter()
            .map(|(tag, schema)| SchemaDocument::from_value(tag, schema))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_documents(documents)
    }

    /// Build a catalog from already parsed documents, in precedence order
    pub fn from_documents(documents: Vec<SchemaDocument>) -> Result<Self, SchemaLoadError> {
        let mut entries: Vec<Arc<SchemaDocument>> = Vec::with_capacity(documents.len());

        for document in documents {
            let tag = document.tag();
            if tag.is_unknown() {
                return Err(SchemaLoadError::ReservedTag);
            }
            if entries.iter().any(|existing| existing.tag() == tag) {
                return Err(SchemaLoadError::DuplicateTag(tag));
            }
            entries.push(Arc::new(document));
        }

        info!("Loaded schema catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Entries in precedence order
    pub fn entries(&self) -> impl Iterator<Item = &SchemaDocument> {
        self.entries.iter().map(Arc::as_ref)
    }

    /// Types in precedence order
    pub fn tags(&self) -> Vec<TypeTag> {
        self.entries.iter().map(|doc| doc.tag()).collect()
    }

    /// Schema registered for a type
    pub fn get(&self, tag: TypeTag) -> Option<&SchemaDocument> {
        self.entries().find(|doc| doc.tag() == tag)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compile every entry with the default `jsonschema` engine
    pub fn compile(&self) -> CompileReport<JsonSchemaEngine> {
        self.compile_all(Arc::new(JsonSchemaEngine::new()))
    }

    /// Compile every entry with `engine`
    ///
    /// Entries that fail to compile are reported in
    /// [`CompileReport::failures`] and left out of the compiled catalog;
    /// the rest keep their relative order. Afterwards the engine keeps only
    /// compilations for this catalog's schemas, so reloading through a
    /// shared engine does not accumulate stale validators.
    pub fn compile_all<E: SchemaEngine>(&self, engine: Arc<E>) -> CompileReport<E> {
        let mut compiled = Vec::with_capacity(self.entries.len());
        let mut failures = Vec::new();

        for document in &self.entries {
            match engine.compile(document) {
                Ok(schema) => compiled.push(CompiledEntry {
                    document: Arc::clone(document),
                    compiled: schema,
                }),
                Err(e) => {
                    warn!(tag = %document.tag(), error = %e, "Skipping schema that failed to compile");
                    failures.push(SchemaCompileError {
                        tag: document.tag(),
                        cause: e.to_string(),
                    });
                }
            }
        }

        let uris: Vec<&str> = self.entries.iter().map(|doc| doc.uri()).collect();
        engine.retain(&uris);

        info!(
            "Compiled {} of {} schemas ({} failed)",
            compiled.len(),
            self.entries.len(),
            failures.len()
        );

        CompileReport {
            catalog: CompiledCatalog {
                engine,
                entries: compiled,
            },
            failures,
        }
    }
}

/// Outcome of compiling a catalog
pub struct CompileReport<E: SchemaEngine = JsonSchemaEngine> {
    /// Catalog holding every entry that compiled
    pub catalog: CompiledCatalog<E>,
    /// Entries that did not compile, in catalog order
    pub failures: Vec<SchemaCompileError>,
}

impl<E: SchemaEngine> CompileReport<E> {
    /// Whether every entry compiled
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A catalog entry in validator-ready form
pub struct CompiledEntry<C> {
    document: Arc<SchemaDocument>,
    compiled: C,
}

impl<C> CompiledEntry<C> {
    /// Type this entry recognizes
    pub fn tag(&self) -> TypeTag {
        self.document.tag()
    }

    /// Source schema
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    /// Engine-specific compiled form
    pub fn compiled(&self) -> &C {
        &self.compiled
    }
}

/// Read-only, fully compiled catalog
///
/// Safe to share across threads behind an `Arc`.
pub struct CompiledCatalog<E: SchemaEngine = JsonSchemaEngine> {
    engine: Arc<E>,
    entries: Vec<CompiledEntry<E::Compiled>>,
}

impl<E: SchemaEngine> CompiledCatalog<E> {
    /// Compiled entries in precedence order
    pub fn entries(&self) -> &[CompiledEntry<E::Compiled>] {
        &self.entries
    }

    /// Types in precedence order
    pub fn tags(&self) -> Vec<TypeTag> {
        self.entries.iter().map(CompiledEntry::tag).collect()
    }

    /// Engine the entries were compiled with
    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// Whether `entry`'s schema accepts `document`
    pub fn accepts(&self, entry: &CompiledEntry<E::Compiled>, document: &Value) -> bool {
        self.engine.matches(entry.compiled(), document)
    }

    /// Compiled entry for a type
    pub fn get(&self, tag: TypeTag) -> Option<&CompiledEntry<E::Compiled>> {
        self.entries.iter().find(|entry| entry.tag() == tag)
    }

    /// Number of usable entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry compiled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: SchemaEngine> std::fmt::Debug for CompiledCatalog<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledCatalog")
            .field("tags", &self.tags())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_preserves_insertion_order() {
        let catalog = Catalog::load([
            (TypeTag::User, r#"{"type":"object"}"#),
            (TypeTag::Explore, r#"{"type":"array"}"#),
            (TypeTag::Inbox, r#"true"#),
        ])
        .unwrap();

        assert_eq!(
            catalog.tags(),
            vec![TypeTag::User, TypeTag::Explore, TypeTag::Inbox]
        );
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(TypeTag::Explore).unwrap().text(), r#"{"type":"array"}"#);
    }

    #[test]
    fn test_load_rejects_unparseable_schema() {
        let result = Catalog::load([
            (TypeTag::User, r#"{"type":"object"}"#),
            (TypeTag::Explore, r#"{"type":"#),
        ]);
        assert!(matches!(result, Err(SchemaLoadError::InvalidJson { .. })));
    }

    #[test]
    fn test_load_rejects_duplicate_tag() {
        let result = Catalog::load([
            (TypeTag::User, r#"{"type":"object"}"#),
            (TypeTag::User, r#"{"type":"array"}"#),
        ]);
        assert!(matches!(result, Err(SchemaLoadError::DuplicateTag(TypeTag::User))));
    }

    #[test]
    fn test_load_rejects_unknown_tag_entry() {
        let result = Catalog::load([(TypeTag::Unknown, "true")]);
        assert!(matches!(result, Err(SchemaLoadError::ReservedTag)));
    }

    #[test]
    fn test_compile_failure_is_per_entry() {
        let catalog = Catalog::from_values([
            (TypeTag::User, json!({"type": "object"})),
            (TypeTag::Explore, json!({"type": 12})),
            (TypeTag::Inbox, json!({"type": "array"})),
        ])
        .unwrap();

        let report = catalog.compile();

        assert!(!report.is_complete());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].tag, TypeTag::Explore);
        assert_eq!(report.catalog.tags(), vec![TypeTag::User, TypeTag::Inbox]);
    }

    #[test]
    fn test_compiled_catalog_accepts() {
        let catalog = Catalog::from_values([(TypeTag::Inbox, json!({"type": "array"}))]).unwrap();
        let compiled = catalog.compile().catalog;
        let entry = compiled.get(TypeTag::Inbox).unwrap();

        assert!(compiled.accepts(entry, &json!([1, 2])));
        assert!(!compiled.accepts(entry, &json!({})));
    }

    #[test]
    fn test_empty_catalog_compiles_to_empty() {
        let report = Catalog::default().compile();
        assert!(report.is_complete());
        assert!(report.catalog.is_empty());
    }
}
