//! Command line front end for building Crossref deposits from published report pages.
//!
//! ```bash
//! # Scrape the configured reports and write <batch id>.xml and <batch id>_audit.csv
//! depositor deposit --output-dir deposits/
//!
//! # Use an external record list and credentials
//! depositor deposit --config deposit.toml
//!
//! # Dump the effective configuration as a starting point for a config file
//! depositor config > deposit.toml
//!
//! # Check what an ORCID link normalizes to
//! depositor orcid "https://orcid.org/0000-0002-1825-0097v"
//! ```
//!
//! Logging goes to stderr and is controlled with `-v` (repeatable) or `RUST_LOG`.

#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Parser};
use console::style;
use depositor::config::Config;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
static WARNING_PREFIX: &str = "⚠️ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Scrape report metadata and build Crossref DOI deposits")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to a TOML configuration file. If not given, the platform default location is
  /// used when it exists, and the built-in configuration otherwise.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: warn (default)
/// - 1: info
/// - 2: debug
/// - 3+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(true)
    .init();
}

/// Loads the configuration the user asked for.
///
/// An explicit `--config` must exist; the default location is only used if present.
fn load_config(path: Option<&Path>) -> Result<Config> {
  if let Some(path) = path {
    return Ok(Config::from_file(path)?);
  }

  let default_path = Config::default_path();
  if default_path.exists() {
    info!("Using configuration at {}", default_path.display());
    Ok(Config::from_file(default_path)?)
  } else {
    debug!("No configuration at {}, using built-in defaults", default_path.display());
    Ok(Config::default())
  }
}

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let result = match &cli.command {
    Commands::Deposit(options) => deposit(&cli, options).await,
    Commands::Orcid { raw } => orcid(raw),
    Commands::Config => show_config(&cli),
  };

  if let Err(e) = result {
    eprintln!("{} {}", style(ERROR_PREFIX).red(), style(e).red());
    std::process::exit(1);
  }
}
