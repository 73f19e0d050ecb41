//! Module for the full scrape-and-write run.

use chrono::Local;
use depositor::{
  batch::{run_batch, BatchId},
  client::HttpFetcher,
  deposit::Deposit,
  scrape::Scraper,
};

use super::*;

/// Function for the [`Commands::Deposit`] in the CLI.
pub async fn deposit(cli: &Cli, options: &DepositOptions) -> Result<()> {
  let config = load_config(cli.config.as_deref())?;
  config.validate()?;

  if !options.output_dir.is_dir() {
    return Err(DepositorCliError::MissingOutputDir(options.output_dir.clone()));
  }

  let started = Local::now().naive_local();
  let batch_id = BatchId::generate(&config.batch_prefix, started);
  println!(
    "{} Building batch {} from {} records",
    style(INFO_PREFIX).cyan(),
    style(&batch_id).yellow(),
    config.records.len()
  );

  let scraper = Scraper::new(HttpFetcher::new()?, config.site.clone())
    .with_throttle(config.throttle());
  let reports = run_batch(&scraper, &config.records).await;

  let skipped = config.records.len() - reports.len();
  if skipped > 0 {
    println!(
      "{} {} of {} records could not be fetched and were left out (run with -v for details)",
      style(WARNING_PREFIX).yellow(),
      skipped,
      config.records.len()
    );
  }

  let deposit = Deposit::new(&config, batch_id, Local::now().naive_local(), reports);
  let files = deposit.write_to(&options.output_dir)?;

  println!("{} Success. Files generated:", style(SUCCESS_PREFIX).green());
  println!("   1. {}", style(files.xml.display()).yellow());
  println!("   2. {}", style(files.audit.display()).yellow());
  Ok(())
}
