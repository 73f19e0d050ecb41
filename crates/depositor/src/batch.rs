//! Batch orchestration and batch identifiers.

use std::fmt;

use super::*;
use crate::scrape::Scraper;

/// Timestamp format appended to the batch prefix; minute resolution.
pub const BATCH_ID_FORMAT: &str = "%Y%m%d%H%M";

/// Timestamp format written into the batch head.
pub const HEAD_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Scrapes every input in order and keeps the reports that could be fetched.
///
/// Inputs are processed strictly one after another. A failed input is skipped and the
/// run carries on; the relative order of the surviving reports matches `inputs`.
pub async fn run_batch<F: Fetcher>(
  scraper: &Scraper<F>,
  inputs: &[InputRecord],
) -> Vec<ReportRecord> {
  let mut reports = Vec::with_capacity(inputs.len());
  for input in inputs {
    if let Some(report) = scraper.fetch_report(&input.url, &input.doi).await {
      reports.push(report);
    }
  }
  info!("Scraped {} of {} reports", reports.len(), inputs.len());
  reports
}

/// Identifier of one deposit submission: `<prefix>_<YYYYMMDDHHMM>`.
///
/// Two runs within the same minute produce the same id. Crossref treats a repeated id as
/// the same submission, so avoiding that is up to whoever runs the tool.
///
/// ```
/// use chrono::NaiveDate;
/// use depositor::batch::BatchId;
///
/// let at = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(9, 5, 59).unwrap();
/// assert_eq!(BatchId::generate("ODI_Deposit", at).as_str(), "ODI_Deposit_202501310905");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchId(String);

impl BatchId {
  /// Builds the id for a run started at `at`.
  pub fn generate(prefix: &str, at: NaiveDateTime) -> Self {
    Self(format!("{prefix}_{}", at.format(BATCH_ID_FORMAT)))
  }

  /// The id as text.
  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for BatchId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Renders the `timestamp` written into the batch head.
pub fn head_timestamp(at: NaiveDateTime) -> String { at.format(HEAD_TIMESTAMP_FORMAT).to_string() }
