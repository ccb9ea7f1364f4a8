//! Recursive sub-document extraction

use crate::{package, Emission, ExtractError, ExtractorConfig};
use serde_json::Value;
use std::sync::Arc;
use taxon_catalog::{builtin, JsonSchemaEngine, SchemaCompileError, SchemaDocument, SchemaEngine};
use taxon_domain::{Attributes, TreeNode};
use tracing::{debug, info};

/// Matches found by one extraction call
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<'a, N: ?Sized> {
    /// Matching nodes in discovery order (depth-first, pre-order)
    pub matches: Vec<&'a N>,

    /// Container nodes the predicate was tested against
    pub visited: usize,
}

impl<'a, N: ?Sized> Extraction<'a, N> {
    fn empty() -> Self {
        Self {
            matches: Vec::new(),
            visited: 0,
        }
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Collect every container node for which `predicate` holds
///
/// The walk is depth-first and pre-order, and it does not stop at a match:
/// descendants of a matching node are tested too. Each object or array is
/// tested exactly once, in document order. Scalars are never tested, so a
/// scalar root yields an empty result.
///
/// The root sits at depth 0. Reaching a container deeper than `max_depth`
/// aborts the call with [`ExtractError::MaxDepthExceeded`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taxon_extractor::extract;
///
/// let doc = json!({"a": {"b": {"user": {"username": "x"}}}});
/// let found = extract(&doc, |node| node.get("username").is_some(), 128)?;
///
/// assert_eq!(found.matches, vec![&json!({"username": "x"})]);
/// assert_eq!(found.visited, 4);
/// # Ok::<(), taxon_extractor::ExtractError>(())
/// ```
pub fn extract<'a, N, P>(
    root: &'a N,
    mut predicate: P,
    max_depth: usize,
) -> Result<Extraction<'a, N>, ExtractError>
where
    N: TreeNode + ?Sized,
    P: FnMut(&N) -> bool,
{
    let mut extraction = Extraction::empty();
    if root.is_container() {
        walk(root, 0, max_depth, &mut predicate, &mut extraction)?;
    }
    Ok(extraction)
}

fn walk<'a, N, P>(
    node: &'a N,
    depth: usize,
    limit: usize,
    predicate: &mut P,
    extraction: &mut Extraction<'a, N>,
) -> Result<(), ExtractError>
where
    N: TreeNode + ?Sized,
    P: FnMut(&N) -> bool,
{
    if depth > limit {
        return Err(ExtractError::MaxDepthExceeded { limit });
    }

    extraction.visited += 1;
    if predicate(node) {
        extraction.matches.push(node);
    }

    for child in node.children().filter(|child| child.is_container()) {
        walk(child, depth + 1, limit, predicate, extraction)?;
    }
    Ok(())
}

/// Collect every node the engine accepts against a compiled target schema
pub fn extract_matches<'a, E: SchemaEngine>(
    root: &'a Value,
    engine: &E,
    target: &E::Compiled,
    max_depth: usize,
) -> Result<Extraction<'a, Value>, ExtractError> {
    extract(root, |node: &Value| engine.matches(target, node), max_depth)
}

/// Extraction bound to one compiled target schema
pub struct Extractor<E: SchemaEngine = JsonSchemaEngine> {
    engine: Arc<E>,
    target: Arc<SchemaDocument>,
    compiled: E::Compiled,
    config: ExtractorConfig,
}

impl Extractor<JsonSchemaEngine> {
    /// Extractor targeting the built-in user schema
    pub fn builtin_user(config: ExtractorConfig) -> Result<Self, ExtractError> {
        let target = builtin::user_document()
            .map_err(|e| ExtractError::Config(format!("Built-in user schema: {}", e)))?;
        Self::new(Arc::new(JsonSchemaEngine::new()), target, config)
            .map_err(|e| ExtractError::Config(e.to_string()))
    }
}

impl<E: SchemaEngine> Extractor<E> {
    /// Compile `target` with `engine`
    ///
    /// # Errors
    ///
    /// Fails with [`SchemaCompileError`] when the engine rejects the target.
    pub fn new(
        engine: Arc<E>,
        target: SchemaDocument,
        config: ExtractorConfig,
    ) -> Result<Self, SchemaCompileError> {
        let compiled = engine.compile(&target).map_err(|e| SchemaCompileError {
            tag: target.tag(),
            cause: e.0,
        })?;

        info!(
            "Extractor ready: target={}, transfer={}, max_depth={}",
            target.uri(),
            config.transfer,
            config.max_depth
        );

        Ok(Self {
            engine,
            target: Arc::new(target),
            compiled,
            config,
        })
    }

    /// Target schema document
    pub fn target(&self) -> &SchemaDocument {
        &self.target
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// All sub-documents of `root` accepted by the target schema
    pub fn extract<'a>(&self, root: &'a Value) -> Result<Extraction<'a, Value>, ExtractError> {
        let extraction = extract_matches(root, &*self.engine, &self.compiled, self.config.max_depth)?;
        debug!(
            matches = extraction.len(),
            visited = extraction.visited,
            "Extraction finished"
        );
        Ok(extraction)
    }

    /// Extract and package matches for emission
    ///
    /// Returns no emissions when nothing matched.
    pub fn emit(&self, root: &Value, parent: &Attributes) -> Result<Vec<Emission>, ExtractError> {
        let extraction = self.extract(root)?;
        Ok(package(
            &extraction.matches,
            self.config.transfer,
            parent,
            &self.config.scheme_type,
        ))
    }
}

impl<E: SchemaEngine> std::fmt::Debug for Extractor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("target", &self.target.uri())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taxon_domain::TypeTag;

    fn has_username(node: &Value) -> bool {
        node.get("username").is_some()
    }

    #[test]
    fn test_nested_match() {
        let doc = json!({"a": {"b": {"user": {"username": "x"}}}});
        let found = extract(&doc, has_username, 128).unwrap();
        assert_eq!(found.matches, vec![&json!({"username": "x"})]);
    }

    #[test]
    fn test_array_order() {
        let doc = json!([{"username": "a"}, {"username": "b"}]);
        let found = extract(&doc, has_username, 128).unwrap();
        assert_eq!(found.matches, vec![&json!({"username": "a"}), &json!({"username": "b"})]);
        assert_eq!(found.visited, 3);
    }

    #[test]
    fn test_descends_below_match() {
        let doc = json!({"username": "outer", "friend": {"username": "inner"}});
        let found = extract(&doc, has_username, 128).unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found.matches[0], &doc);
        assert_eq!(found.matches[1], &json!({"username": "inner"}));
    }

    #[test]
    fn test_object_field_order() {
        let doc = json!({
            "z": {"username": "first"},
            "a": {"username": "second"},
            "m": [{"username": "third"}]
        });
        let names: Vec<_> = extract(&doc, has_username, 128)
            .unwrap()
            .matches
            .into_iter()
            .map(|node| node["username"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let doc = json!({"a": [1, 2, {"b": null}]});
        let found = extract(&doc, has_username, 128).unwrap();
        assert!(found.is_empty());
        assert_eq!(found.visited, 3);
    }

    #[test]
    fn test_scalar_root_is_not_tested() {
        let mut calls = 0;
        let doc = json!("text");
        let found = extract(&doc, |_| {
            calls += 1;
            true
        }, 128)
        .unwrap();

        assert!(found.is_empty());
        assert_eq!(found.visited, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_empty_containers() {
        let doc = json!({"a": [], "b": {}});
        let found = extract(&doc, has_username, 128).unwrap();
        assert!(found.is_empty());
        assert_eq!(found.visited, 3);
    }

    #[test]
    fn test_depth_guard_boundary() {
        // containers at depths 0, 1, 2
        let doc = json!({"a": {"b": {"c": 1}}});

        assert!(extract(&doc, has_username, 2).is_ok());
        assert_eq!(
            extract(&doc, has_username, 1),
            Err(ExtractError::MaxDepthExceeded { limit: 1 })
        );
    }

    #[test]
    fn test_scalars_do_not_count_toward_depth() {
        let doc = json!({"a": {"b": "deep scalar"}});
        assert!(extract(&doc, has_username, 1).is_ok());
    }

    #[test]
    fn test_extract_matches_with_engine() {
        let engine = JsonSchemaEngine::new();
        let target = builtin::user_document().unwrap();
        let compiled = engine.compile(&target).unwrap();

        let doc = json!({
            "users": [
                {"username": "a", "pk": 1},
                {"username": "b"},
                {"username": "c", "id": "42"}
            ]
        });
        let found = extract_matches(&doc, &engine, &compiled, 128).unwrap();
        let names: Vec<_> = found.matches.iter().map(|node| &node["username"]).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_extractor_emit() {
        let extractor = Extractor::builtin_user(ExtractorConfig::default()).unwrap();
        assert_eq!(extractor.target().tag(), TypeTag::User);

        let doc = json!({"user": {"username": "bob", "pk": 7}});
        let emissions = extractor.emit(&doc, &Attributes::new()).unwrap();

        assert_eq!(emissions.len(), 1);
        assert_eq!(emissions[0].document, json!({"username": "bob", "pk": 7}));
        assert_eq!(emissions[0].attributes.get("scheme.type"), Some("user"));
    }

    #[test]
    fn test_extractor_rejects_uncompilable_target() {
        let target = SchemaDocument::from_value(TypeTag::User, json!({"type": 12})).unwrap();
        let err = Extractor::new(
            Arc::new(JsonSchemaEngine::new()),
            target,
            ExtractorConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.tag, TypeTag::User);
    }
}
