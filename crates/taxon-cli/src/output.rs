//! JSON-lines output.

use crate::error::Result;
use serde_json::{json, Map, Value};
use std::io::Write;
use taxon_catalog::{Catalog, CompiledCatalog, SchemaCompileError};
use taxon_classifier::ClassificationResult;
use taxon_domain::Attributes;
use taxon_extractor::Emission;

/// Route for documents that could not be read or parsed.
pub const FAILURE_ROUTE: &str = "failure";

/// Route for extraction inputs with no matches.
pub const NONE_ROUTE: &str = "none";

/// Route for extracted documents.
pub const SUCCESS_ROUTE: &str = "success";

/// Write one JSON value followed by a newline.
pub fn write_line<W: Write>(out: &mut W, line: &Value) -> Result<()> {
    serde_json::to_writer(&mut *out, line)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Attributes as a JSON object, in insertion order.
pub fn attributes_json(attributes: &Attributes) -> Value {
    let fields: Map<String, Value> = attributes
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(value)))
        .collect();
    Value::Object(fields)
}

/// Line describing a classified document.
pub fn classified_line(source: &str, result: &ClassificationResult) -> Value {
    json!({
        "source": source,
        "route": result.route(),
        "tag": result.tag.label(),
        "label": result.label(),
        "attributes": attributes_json(&result.attributes),
    })
}

/// Line carrying one extracted document.
pub fn emission_line(source: &str, emission: &Emission) -> Value {
    json!({
        "source": source,
        "route": SUCCESS_ROUTE,
        "attributes": attributes_json(&emission.attributes),
        "document": emission.document,
    })
}

/// Line for an extraction input that yielded nothing.
pub fn none_line(source: &str) -> Value {
    json!({ "source": source, "route": NONE_ROUTE })
}

/// Line for a document that failed.
pub fn failure_line(source: &str, error: &impl std::fmt::Display) -> Value {
    json!({
        "source": source,
        "route": FAILURE_ROUTE,
        "error": error.to_string(),
    })
}

/// Lines describing each catalog entry and whether it compiled.
pub fn catalog_lines(
    catalog: &Catalog,
    compiled: &CompiledCatalog,
    failures: &[SchemaCompileError],
) -> Vec<Value> {
    catalog
        .entries()
        .enumerate()
        .map(|(position, document)| {
            let tag = document.tag();
            let mut line = json!({
                "position": position,
                "type": tag.label(),
                "route": tag.route(),
                "uri": document.uri(),
                "compiled": compiled.get(tag).is_some(),
            });
            if let Some(failure) = failures.iter().find(|failure| failure.tag == tag) {
                line["error"] = Value::from(failure.cause.as_str());
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxon_domain::TypeTag;

    #[test]
    fn test_write_line() {
        let mut out = Vec::new();
        write_line(&mut out, &json!({"a": 1})).unwrap();
        write_line(&mut out, &json!({"b": 2})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_attributes_keep_order() {
        let mut attributes = Attributes::new();
        attributes.insert("scheme.type", "user");
        attributes.insert("filename", "a.json");

        let json = attributes_json(&attributes);
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["scheme.type", "filename"]);
    }

    #[test]
    fn test_classified_line() {
        let line = classified_line("a.json", &ClassificationResult::unmatched());
        assert_eq!(line["route"], "unknown");
        assert_eq!(line["tag"], "unknown");
        assert_eq!(line["attributes"], json!({}));
    }

    #[test]
    fn test_catalog_lines_report_failures() {
        let catalog = Catalog::from_values([
            (TypeTag::Inbox, json!({"type": 12})),
            (TypeTag::User, json!({"type": "object"})),
        ])
        .unwrap();
        let report = catalog.compile();
        let lines = catalog_lines(&catalog, &report.catalog, &report.failures);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["compiled"], false);
        assert!(lines[0].get("error").is_some());
        assert_eq!(lines[1]["compiled"], true);
        assert_eq!(lines[1]["type"], "user");
    }
}
