//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::commands::load_catalog;
use crate::config::Config;
use crate::error::Result;
use crate::input::{read_inputs, Input};
use crate::output::{classified_line, failure_line, write_line};
use std::io::Write;
use taxon_catalog::CatalogHandle;
use taxon_classifier::Branching;
use tracing::{debug, info, warn};

/// Execute the classify command.
pub fn execute_classify<W: Write>(args: ClassifyArgs, config: &Config, out: &mut W) -> Result<()> {
    let mut classifier_config = config.classifier.clone();
    if args.no_attributes {
        classifier_config.allow_set_scheme = false;
    }

    let report = load_catalog(args.schemes.as_deref())?.compile();
    if !report.is_complete() {
        warn!(
            "{} schema(s) failed to compile and will never match",
            report.failures.len()
        );
    }

    let branching = Branching::new(CatalogHandle::with_catalog(report.catalog), classifier_config);
    classify_inputs(&branching, &read_inputs(&args.files), out)?;

    let metrics = branching.metrics();
    info!(
        "Classified {} documents ({} unparseable)",
        metrics.total(),
        metrics.unparseable
    );
    debug!("{}", metrics.summary());
    Ok(())
}

/// Classify each input and write one line per document.
///
/// Unparseable inputs get a failure line; the batch carries on.
pub fn classify_inputs<W: Write>(branching: &Branching, inputs: &[Input], out: &mut W) -> Result<()> {
    for input in inputs {
        let line = match input.document() {
            Ok(document) => classified_line(&input.source, &branching.route(&document)?),
            Err(e) => {
                warn!("Skipping {}: {}", input.source, e);
                branching.record_unparseable();
                failure_line(&input.source, &e)
            }
        };
        write_line(out, &line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use taxon_catalog::builtin;
    use taxon_classifier::ClassifierConfig;

    fn run(inputs: &[Input]) -> Vec<Value> {
        let catalog = builtin::builtin_catalog().unwrap().compile().catalog;
        let branching = Branching::new(CatalogHandle::with_catalog(catalog), ClassifierConfig::default());

        let mut out = Vec::new();
        classify_inputs(&branching, inputs, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_one_line_per_document() {
        let lines = run(&[
            Input::from_text("a.json", r#"{"user": {"username": "bob"}}"#),
            Input::from_text("b.json", r#"{"username": "bob", "pk": 1}"#),
            Input::from_text("c.json", r#"{"items": []}"#),
        ]);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["route"], "profile");
        assert_eq!(lines[0]["label"], "profile-api-info:id");
        assert_eq!(lines[0]["attributes"]["scheme.type"], "profile-api-info:id");
        assert_eq!(lines[1]["route"], "user");
        assert_eq!(lines[2]["route"], "unknown");
    }

    #[test]
    fn test_unparseable_document_continues_batch() {
        let lines = run(&[
            Input::from_text("bad.json", "{"),
            Input::from_text("good.json", r#"{"data": {"user": {}}}"#),
        ]);

        assert_eq!(lines[0]["route"], "failure");
        assert_eq!(lines[0]["source"], "bad.json");
        assert!(lines[0]["error"].as_str().unwrap().contains("bad.json"));
        assert_eq!(lines[1]["label"], "profile-graphql:variable");
    }

    #[test]
    fn test_empty_catalog_handle_fails() {
        let branching: Branching = Branching::new(CatalogHandle::empty(), ClassifierConfig::default());
        let mut out: Vec<u8> = Vec::new();
        let result = classify_inputs(&branching, &[Input::from_text("a.json", "{}")], &mut out);
        assert!(result.is_err());
    }
}
