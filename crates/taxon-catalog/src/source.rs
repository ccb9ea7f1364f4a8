//! Schema source files
//!
//! A catalog source is a JSON array of entries, in precedence order:
//!
//! ```json
//! [
//!   { "type": "profile", "scheme": { "type": "object", "anyOf": [ ... ] } },
//!   { "type": "user", "scheme": { "type": "object", "required": ["username"] } }
//! ]
//! ```
//!
//! A target-schema source for extraction is a file holding a single schema.

use crate::{Catalog, SchemaDocument, SchemaLoadError};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use taxon_domain::TypeTag;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct SourceEntry {
    #[serde(rename = "type")]
    label: String,
    scheme: Value,
}

/// Parse a catalog source held in memory
///
/// Entries whose label names no known type, or the fallback type, are
/// skipped with a warning so sources written for newer type sets still load.
pub fn catalog_from_str(text: &str) -> Result<Catalog, SchemaLoadError> {
    let raw: Vec<SourceEntry> = serde_json::from_str(text)
        .map_err(|e| SchemaLoadError::MalformedSource(e.to_string()))?;

    let entries = raw.into_iter().filter_map(|entry| {
        match TypeTag::from_label(&entry.label) {
            Some(tag) if !tag.is_unknown() => Some((tag, entry.scheme)),
            _ => {
                warn!(label = %entry.label, "Skipping schema source entry with unrecognized type");
                None
            }
        }
    });

    Catalog::from_values(entries)
}

/// Read and parse a catalog source file
pub fn catalog_from_path(path: impl AsRef<Path>) -> Result<Catalog, SchemaLoadError> {
    catalog_from_str(&read(path.as_ref())?)
}

/// Read a single schema file, binding it to `tag`
pub fn schema_from_path(
    path: impl AsRef<Path>,
    tag: TypeTag,
) -> Result<SchemaDocument, SchemaLoadError> {
    SchemaDocument::parse(tag, &read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, SchemaLoadError> {
    std::fs::read_to_string(path).map_err(|source| SchemaLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_entries_keep_file_order() {
        let catalog = catalog_from_str(
            r#"[
                {"type": "story:reel", "scheme": {"type": "object"}},
                {"type": "direct", "scheme": {"type": "object"}},
                {"type": "user", "scheme": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            catalog.tags(),
            vec![TypeTag::StoryReel, TypeTag::Direct, TypeTag::User]
        );
    }

    #[test]
    fn test_unrecognized_labels_are_skipped() {
        let catalog = catalog_from_str(
            r#"[
                {"type": "reel", "scheme": {}},
                {"type": "inbox", "scheme": {"type": "object"}},
                {"type": "unknown", "scheme": true},
                {"type": "user", "scheme": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.tags(), vec![TypeTag::Inbox, TypeTag::User]);
    }

    #[test]
    fn test_duplicate_label_is_rejected() {
        let err = catalog_from_str(
            r#"[
                {"type": "user", "scheme": true},
                {"type": "user", "scheme": false}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaLoadError::DuplicateTag(TypeTag::User)));
    }

    #[test]
    fn test_missing_scheme_is_malformed() {
        let err = catalog_from_str(r#"[{"type": "user"}]"#).unwrap_err();
        assert!(matches!(err, SchemaLoadError::MalformedSource(_)));
    }

    #[test]
    fn test_non_array_source_is_malformed() {
        let err = catalog_from_str(r#"{"type": "user", "scheme": {}}"#).unwrap_err();
        assert!(matches!(err, SchemaLoadError::MalformedSource(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = catalog_from_path("/nonexistent/taxon/schemes.json").unwrap_err();
        assert!(matches!(err, SchemaLoadError::Io { .. }));
    }
}
