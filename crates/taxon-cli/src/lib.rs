//! Taxon CLI library.
//!
//! Command-line adapter around the classifier and extractor: reads JSON
//! documents from files or stdin and writes one JSON line per result to
//! stdout. Logs go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
