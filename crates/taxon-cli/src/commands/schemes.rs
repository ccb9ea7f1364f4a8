//! Schemes command implementation.

use crate::cli::SchemesArgs;
use crate::commands::load_catalog;
use crate::error::Result;
use crate::output::{catalog_lines, write_line};
use std::io::Write;

/// Execute the schemes command.
pub fn execute_schemes<W: Write>(args: SchemesArgs, out: &mut W) -> Result<()> {
    let catalog = load_catalog(args.schemes.as_deref())?;
    let report = catalog.compile();

    for line in catalog_lines(&catalog, &report.catalog, &report.failures) {
        write_line(out, &line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_builtin_catalog_listing() {
        let mut out = Vec::new();
        execute_schemes(SchemesArgs { schemes: None }, &mut out).unwrap();

        let lines: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "profile");
        assert_eq!(lines[1]["type"], "user");
        assert!(lines.iter().all(|line| line["compiled"] == true));
    }
}
