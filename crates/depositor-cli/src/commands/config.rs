//! Module for printing the effective configuration.

use super::*;

/// Function for the [`Commands::Config`] in the CLI.
pub fn show_config(cli: &Cli) -> Result<()> {
  let config = load_config(cli.config.as_deref())?;
  print!("{}", config.to_toml_string()?);
  Ok(())
}
