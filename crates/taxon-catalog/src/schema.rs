//! Parsed, immutable schema documents

use crate::SchemaLoadError;
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use taxon_domain::TypeTag;

/// A parsed schema bound to the type it recognizes
///
/// The URI is `urn:taxon:schema:<label>#<fingerprint>`, where the fingerprint
/// is taken over the canonical schema text. Engines key their compilation
/// cache on it, so a changed schema never reuses a stale compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    tag: TypeTag,
    uri: String,
    schema: Value,
    text: String,
}

impl SchemaDocument {
    /// Parse schema text for a type
    pub fn parse(tag: TypeTag, text: &str) -> Result<Self, SchemaLoadError> {
        let schema: Value =
            serde_json::from_str(text).map_err(|e| SchemaLoadError::InvalidJson {
                tag: tag.label().to_string(),
                message: e.to_string(),
            })?;
        Self::from_value(tag, schema)
    }

    /// Wrap an already parsed schema value
    ///
    /// Only objects and booleans are schema documents.
    pub fn from_value(tag: TypeTag, schema: Value) -> Result<Self, SchemaLoadError> {
        let found = match &schema {
            Value::Object(_) | Value::Bool(_) => None,
            Value::Null => Some("null"),
            Value::Number(_) => Some("number"),
            Value::String(_) => Some("string"),
            Value::Array(_) => Some("array"),
        };
        if let Some(found) = found {
            return Err(SchemaLoadError::NotASchema {
                tag: tag.label().to_string(),
                found,
            });
        }

        let text = schema.to_string();
        let uri = format!("urn:taxon:schema:{}#{:016x}", tag.label(), fingerprint(&text));

        Ok(Self {
            tag,
            uri,
            schema,
            text,
        })
    }

    /// Type this schema recognizes
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Stable identity used as the compilation cache key
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Parsed schema
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Compact JSON text of the schema, as attached to results
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn fingerprint(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
