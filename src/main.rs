//! Binary entry point for leetset.
//!
//! Parses and validates flags, creates the output file, and hands a
//! configuration plus an open writer to the conversion core.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr/print_stdout in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use clap::Parser;
use leetset::config::ConvertConfig;
use leetset::{ConvertService, Error, Format};
use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;
use std::str::FromStr;

/// Leetset - converts a LeetCode-style solutions repository into a tabular dataset.
#[derive(Parser)]
#[command(name = "leetset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the solutions repository.
    #[arg(short, long, default_value = ".")]
    repo: String,

    /// Output format: parquet, csv, or json.
    #[arg(short, long, default_value = "parquet")]
    format: String,

    /// Base output filename (extension is added per format).
    #[arg(short, long, default_value = "leetcode-solutions")]
    output: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match validate(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid arguments: {e}");
            return ExitCode::FAILURE;
        },
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default level; `--verbose` lowers it to debug.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validates flags into a configuration.
fn validate(cli: &Cli) -> Result<ConvertConfig, Error> {
    if cli.repo.is_empty() {
        return Err(Error::InvalidInput(
            "repository path cannot be empty".to_string(),
        ));
    }
    if cli.output.is_empty() {
        return Err(Error::InvalidInput(
            "output name cannot be empty".to_string(),
        ));
    }

    let format = Format::from_str(&cli.format)?;
    Ok(ConvertConfig::new(&cli.repo, format, &cli.output))
}

/// Runs one conversion with a validated configuration.
fn run(config: &ConvertConfig) -> Result<(), Error> {
    let output_path = config.output_path();
    let file = File::create(&output_path).map_err(|e| Error::OperationFailed {
        operation: "create_output_file".to_string(),
        cause: format!("{}: {e}", output_path.display()),
    })?;

    let service = ConvertService::new(config.walk_root());
    let report = service.convert_to_writer(BufWriter::new(file), config.format)?;

    println!(
        "Wrote {} rows to {} ({} directories processed, {} failed)",
        report.rows_written,
        output_path.display(),
        report.processed,
        report.failed
    );

    Ok(())
}
