//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::{read_inputs, Input};
use crate::output::{emission_line, failure_line, none_line, write_line};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use taxon_catalog::{source, JsonSchemaEngine};
use taxon_domain::{Attributes, TypeTag};
use taxon_extractor::{Extractor, ExtractorConfig};
use tracing::{info, warn};

/// Attribute carrying the input's source name.
pub const FILENAME_ATTRIBUTE: &str = "filename";

/// Execute the extract command.
pub fn execute_extract<W: Write>(args: ExtractArgs, config: &Config, out: &mut W) -> Result<()> {
    let mut extractor_config = config.extractor.clone();
    if let Some(transfer) = args.transfer {
        extractor_config.transfer = transfer;
    }
    if let Some(max_depth) = args.max_depth {
        extractor_config.max_depth = max_depth;
    }
    if let Some(scheme_type) = args.scheme_type {
        extractor_config.scheme_type = scheme_type;
    }
    extractor_config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let extractor = build_extractor(args.schema.as_deref(), extractor_config)?;
    let emitted = extract_inputs(&extractor, &read_inputs(&args.files), out)?;
    info!("Emitted {} documents", emitted);
    Ok(())
}

/// Extractor for a target schema file, or the built-in user schema.
pub fn build_extractor(
    schema: Option<&Path>,
    config: ExtractorConfig,
) -> Result<Extractor> {
    let Some(path) = schema else {
        return Ok(Extractor::builtin_user(config)?);
    };

    let tag = TypeTag::from_label(&config.scheme_type).unwrap_or(TypeTag::User);
    let target = source::schema_from_path(path, tag)?;
    Ok(Extractor::new(Arc::new(JsonSchemaEngine::new()), target, config)?)
}

/// Extract from each input and write one line per emitted document.
///
/// An input with no matches gets a `none` line; an unparseable input or one
/// that trips the depth guard gets a failure line. Returns the number of
/// emitted documents.
pub fn extract_inputs<W: Write>(extractor: &Extractor, inputs: &[Input], out: &mut W) -> Result<usize> {
    let mut emitted = 0;

    for input in inputs {
        let mut parent = Attributes::new();
        parent.insert(FILENAME_ATTRIBUTE, input.source.as_str());

        let result = input
            .document()
            .and_then(|document| extractor.emit(&document, &parent).map_err(CliError::from));

        match result {
            Ok(emissions) if emissions.is_empty() => write_line(out, &none_line(&input.source))?,
            Ok(emissions) => {
                for emission in &emissions {
                    write_line(out, &emission_line(&input.source, emission))?;
                }
                emitted += emissions.len();
            }
            Err(e) => {
                warn!("Skipping {}: {}", input.source, e);
                write_line(out, &failure_line(&input.source, &e))?;
            }
        }
    }

    Ok(emitted)
}
