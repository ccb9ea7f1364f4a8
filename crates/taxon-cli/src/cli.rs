//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taxon_extractor::TransferMode;

/// Taxon - Classify JSON documents and extract embedded records.
#[derive(Debug, Parser)]
#[command(name = "taxon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "TAXON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify each document against a schema catalog
    Classify(ClassifyArgs),

    /// Extract sub-documents matching a target schema
    Extract(ExtractArgs),

    /// List catalog entries in precedence order
    Schemes(SchemesArgs),
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Schema source file (built-in catalog when omitted)
    #[arg(short, long)]
    pub schemes: Option<PathBuf>,

    /// Do not attach scheme.type and scheme.json attributes
    #[arg(long)]
    pub no_attributes: bool,

    /// Input documents, one JSON document per file (stdin when none)
    pub files: Vec<PathBuf>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Target schema file (built-in user schema when omitted)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Emit one document per match (object) or one bundle (array)
    #[arg(short, long)]
    pub transfer: Option<TransferMode>,

    /// Maximum container nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Label written to scheme.type on emitted documents
    #[arg(long)]
    pub scheme_type: Option<String>,

    /// Input documents, one JSON document per file (stdin when none)
    pub files: Vec<PathBuf>,
}

/// Arguments for the schemes command.
#[derive(Debug, Parser)]
pub struct SchemesArgs {
    /// Schema source file (built-in catalog when omitted)
    #[arg(short, long)]
    pub schemes: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from([
            "taxon", "extract", "--transfer", "array", "--max-depth", "8", "feed.json",
        ])
        .unwrap();

        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.transfer, Some(TransferMode::Array));
                assert_eq!(args.max_depth, Some(8));
                assert_eq!(args.files, vec![PathBuf::from("feed.json")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reject_unknown_transfer() {
        assert!(Cli::try_parse_from(["taxon", "extract", "--transfer", "stream"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["taxon", "schemes", "-v", "--config", "taxon.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("taxon.toml")));
    }
}
