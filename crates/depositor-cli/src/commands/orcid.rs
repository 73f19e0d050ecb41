//! Module for checking ORCID normalization from the command line.

use depositor::orcid::normalize_orcid;

use super::*;

/// Function for the [`Commands::Orcid`] in the CLI.
pub fn orcid(raw: &[String]) -> Result<()> {
  for input in raw {
    match normalize_orcid(Some(input)) {
      Some(orcid) => println!("{} {}", style(SUCCESS_PREFIX).green(), orcid),
      None => println!(
        "{} No ORCID found in {}",
        style(WARNING_PREFIX).yellow(),
        style(format!("{input:?}")).yellow()
      ),
    }
  }
  Ok(())
}
