//! Validator adapter over a schema validation engine

use crate::{EngineError, SchemaDocument};
use jsonschema::Validator;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// A schema engine: compiles schemas once, then answers accept/reject
///
/// Implementations must be shareable across threads, since one compiled
/// catalog serves many concurrent classification calls.
pub trait SchemaEngine: Send + Sync {
    /// Validator-ready form of a schema
    type Compiled: Send + Sync;

    /// Compile a schema document
    fn compile(&self, schema: &SchemaDocument) -> Result<Self::Compiled, EngineError>;

    /// Whether `document` satisfies the compiled schema
    fn matches(&self, compiled: &Self::Compiled, document: &Value) -> bool;

    /// Forget cached compilations for every URI not in `uris`
    ///
    /// Engines without a cache have nothing to forget.
    fn retain(&self, _uris: &[&str]) {}
}

struct CachedValidator {
    text: String,
    validator: Arc<Validator>,
}

/// Engine backed by the `jsonschema` crate
///
/// Compiled validators are cached by schema URI. A hit is only reused when
/// the cached schema text is identical, so a fingerprint collision costs a
/// recompile rather than a wrong answer.
#[derive(Default)]
pub struct JsonSchemaEngine {
    cache: RwLock<HashMap<String, CachedValidator>>,
}

impl JsonSchemaEngine {
    /// Create an engine with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of compiled schemas held in the cache
    pub fn cached(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SchemaEngine for JsonSchemaEngine {
    type Compiled = Arc<Validator>;

    fn compile(&self, schema: &SchemaDocument) -> Result<Self::Compiled, EngineError> {
        if let Some(cached) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(schema.uri())
        {
            if cached.text == schema.text() {
                debug!(uri = schema.uri(), "Reusing compiled schema");
                return Ok(Arc::clone(&cached.validator));
            }
            warn!(uri = schema.uri(), "Schema URI collision, recompiling");
        }

        let validator = jsonschema::validator_for(schema.schema())
            .map(Arc::new)
            .map_err(|e| EngineError(e.to_string()))?;

        self.cache.write().unwrap_or_else(PoisonError::into_inner).insert(
            schema.uri().to_string(),
            CachedValidator {
                text: schema.text().to_string(),
                validator: Arc::clone(&validator),
            },
        );

        debug!(uri = schema.uri(), "Compiled schema");
        Ok(validator)
    }

    fn matches(&self, compiled: &Self::Compiled, document: &Value) -> bool {
        compiled.is_valid(document)
    }

    fn retain(&self, uris: &[&str]) {
        let keep: HashSet<&str> = uris.iter().copied().collect();
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let before = cache.len();
        cache.retain(|uri, _| keep.contains(uri.as_str()));

        if cache.len() < before {
            debug!(evicted = before - cache.len(), "Evicted stale compiled schemas");
        }
    }
}
