//! Subcommands of the `depositor` binary.

use clap::{Args, Subcommand};

use super::*;

pub mod config;
pub mod deposit;
pub mod orcid;

pub use config::show_config;
pub use deposit::deposit;
pub use orcid::orcid;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Scrape every configured report and write the deposit XML and audit CSV
  Deposit(DepositOptions),

  /// Normalize one or more raw ORCID strings or links
  Orcid {
    /// Raw identifiers, e.g. "https://orcid.org/0000-0002-1825-0097v"
    #[arg(required = true)]
    raw: Vec<String>,
  },

  /// Print the effective configuration as TOML
  Config,
}

/// Options for [`Commands::Deposit`].
#[derive(Args, Clone)]
pub struct DepositOptions {
  /// Directory the XML and audit CSV are written to
  #[arg(long, short, default_value = ".")]
  pub output_dir: PathBuf,
}
