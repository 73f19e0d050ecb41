//! Output assembly: one batch id, one head, the scraped reports, and the two files
//! written from them.

use super::*;
use crate::{
  audit::write_audit,
  batch::{head_timestamp, BatchId},
  config::Config,
  crossref::{build_batch, Head},
};

/// A deposit ready to be rendered.
#[derive(Debug, Clone)]
pub struct Deposit {
  /// Batch id; also the stem of both output file names
  pub batch_id: BatchId,
  /// `head` block of the XML
  pub head:     Head,
  /// Reports in deposit order
  pub reports:  Vec<ReportRecord>,
}

/// Paths of the files written by [`Deposit::write_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositFiles {
  /// `<batch id>.xml`
  pub xml:   PathBuf,
  /// `<batch id>_audit.csv`
  pub audit: PathBuf,
}

impl Deposit {
  /// Assembles a deposit from the configured credentials.
  ///
  /// `generated_at` is written into the head as the batch timestamp.
  pub fn new(
    config: &Config,
    batch_id: BatchId,
    generated_at: NaiveDateTime,
    reports: Vec<ReportRecord>,
  ) -> Self {
    let head = Head {
      batch_id:        batch_id.to_string(),
      timestamp:       head_timestamp(generated_at),
      depositor_name:  config.depositor.name.clone(),
      depositor_email: config.depositor.email.clone(),
      registrant:      config.depositor.registrant.clone(),
    };
    Self { batch_id, head, reports }
  }

  /// The Crossref `doi_batch` document.
  pub fn to_xml(&self) -> Result<String> { build_batch(&self.head, &self.reports) }

  /// The audit spreadsheet as CSV text.
  pub fn to_audit_csv(&self) -> Result<String> { write_audit(&self.reports) }

  /// File names this deposit is written under, relative to `dir`.
  pub fn files_in(&self, dir: impl AsRef<Path>) -> DepositFiles {
    let dir = dir.as_ref();
    DepositFiles {
      xml:   dir.join(format!("{}.xml", self.batch_id)),
      audit: dir.join(format!("{}_audit.csv", self.batch_id)),
    }
  }

  /// Writes both files into `dir`, which must already exist.
  ///
  /// Both documents are rendered before either file is touched. A write failure is
  /// returned as is; a partially written file is left in place.
  pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<DepositFiles> {
    let files = self.files_in(dir);
    let xml = self.to_xml()?;
    let audit = self.to_audit_csv()?;

    std::fs::write(&files.xml, xml)?;
    std::fs::write(&files.audit, audit)?;
    info!(
      "Wrote {} reports to {} and {}",
      self.reports.len(),
      files.xml.display(),
      files.audit.display()
    );
    Ok(files)
  }
}
