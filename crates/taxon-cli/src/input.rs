//! Reading input documents.

use crate::error::{CliError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Source name used for documents read from stdin.
pub const STDIN_SOURCE: &str = "-";

/// Raw input document and where it came from.
#[derive(Debug)]
pub struct Input {
    /// File path, or `-` for stdin
    pub source: String,
    contents: io::Result<String>,
}

impl Input {
    /// Input from in-memory text.
    pub fn from_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            contents: Ok(text.into()),
        }
    }

    /// Parse the input as one JSON document.
    ///
    /// Read and parse failures both come back as
    /// [`CliError::DocumentUnparseable`]. Nesting is not limited here; the
    /// extractor's depth guard decides how deep a document may go, and the
    /// parser grows its stack on the heap instead of overflowing.
    pub fn document(&self) -> Result<Value> {
        let text = self.contents.as_ref().map_err(|e| self.unparseable(e))?;

        let mut parser = serde_json::Deserializer::from_str(text);
        parser.disable_recursion_limit();
        let document = Value::deserialize(serde_stacker::Deserializer::new(&mut parser))
            .map_err(|e| self.unparseable(e))?;
        parser.end().map_err(|e| self.unparseable(e))?;
        Ok(document)
    }

    fn unparseable(&self, cause: impl ToString) -> CliError {
        CliError::DocumentUnparseable {
            input: self.source.clone(),
            message: cause.to_string(),
        }
    }
}

/// Read every file in order, or stdin when `files` is empty.
///
/// A file that cannot be read is still returned; the failure surfaces when
/// the document is parsed so the rest of the batch carries on.
pub fn read_inputs(files: &[PathBuf]) -> Vec<Input> {
    if files.is_empty() {
        let mut text = String::new();
        let contents = io::stdin().read_to_string(&mut text).map(|_| text);
        return vec![Input {
            source: STDIN_SOURCE.to_string(),
            contents,
        }];
    }

    files
        .iter()
        .map(|path| Input {
            source: path.display().to_string(),
            contents: fs::read_to_string(path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_document() {
        let input = Input::from_text("a.json", r#"{"user": {"username": "bob"}}"#);
        assert_eq!(input.document().unwrap(), json!({"user": {"username": "bob"}}));
    }

    #[test]
    fn test_unparseable_document() {
        let input = Input::from_text("broken.json", "{not json");
        match input.document() {
            Err(CliError::DocumentUnparseable { input, .. }) => assert_eq!(input, "broken.json"),
            other => panic!("expected unparseable, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_text_is_unparseable() {
        let input = Input::from_text("two.json", "{} {}");
        assert!(matches!(
            input.document(),
            Err(CliError::DocumentUnparseable { .. })
        ));
    }

    #[test]
    fn test_deep_document_parses() {
        let depth = 1_000;
        let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        let mut node = &Input::from_text("deep.json", text).document().unwrap();
        let mut levels = 1;
        while let Some(child) = node.get(0) {
            node = child;
            levels += 1;
        }
        assert_eq!(levels, depth);
    }

    #[test]
    fn test_read_files_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("1.json");
        let second = dir.path().join("2.json");
        fs::write(&first, "[1]").unwrap();
        fs::write(&second, "[2]").unwrap();

        let inputs = read_inputs(&[first, second]);
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].document().unwrap(), json!([1]));
        assert_eq!(inputs[1].document().unwrap(), json!([2]));
    }

    #[test]
    fn test_missing_file_is_unparseable() {
        let dir = TempDir::new().unwrap();
        let inputs = read_inputs(&[dir.path().join("absent.json")]);
        assert!(matches!(
            inputs[0].document(),
            Err(CliError::DocumentUnparseable { .. })
        ));
    }
}
