//! Taxon CLI - Classify JSON documents and extract embedded records.

use clap::Parser;
use std::io;
use taxon_cli::commands;
use taxon_cli::{Cli, Command, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> taxon_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Classify(args) => commands::execute_classify(args, &config, &mut out)?,
        Command::Extract(args) => commands::execute_extract(args, &config, &mut out)?,
        Command::Schemes(args) => commands::execute_schemes(args, &mut out)?,
    }

    Ok(())
}

/// Log to stderr so stdout carries only result lines.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}
