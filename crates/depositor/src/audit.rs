//! CSV audit of a deposit, for human review before submission.
//!
//! Columns are `DOI`, `Title` and `Authors`, where `Authors` lists family names in page
//! order, e.g. `['Doe', 'Smith']`.

use super::*;

/// Column headings, always written even when there are no reports.
pub const HEADERS: [&str; 3] = ["DOI", "Title", "Authors"];

/// Renders one row per report as CSV text.
///
/// # Examples
///
/// ```
/// use depositor::audit::write_audit;
///
/// let csv = write_audit(&[]).unwrap();
/// assert_eq!(csv, "DOI,Title,Authors\n");
/// ```
pub fn write_audit(reports: &[ReportRecord]) -> Result<String> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(HEADERS)?;
  for report in reports {
    writer.write_record([
      report.doi.as_str(),
      report.title.as_str(),
      family_names(&report.authors).as_str(),
    ])?;
  }
  let bytes = writer.into_inner().map_err(|e| DepositorError::Io(e.into_error()))?;
  Ok(String::from_utf8(bytes)?)
}

/// Bracketed, quoted list of family names, in the form a Python list of strings prints as.
fn family_names(authors: &[AuthorRecord]) -> String {
  let quoted: Vec<String> =
    authors.iter().map(|author| quote_name(&author.family_name)).collect();
  format!("[{}]", quoted.join(", "))
}

/// Single-quotes `name`, switching to double quotes when it contains a single quote but
/// no double quote. Backslashes, the chosen quote and control characters are escaped.
fn quote_name(name: &str) -> String {
  let quote = if name.contains('\'') && !name.contains('"') { '"' } else { '\'' };
  let mut out = String::with_capacity(name.len() + 2);
  out.push(quote);
  for c in name.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      c if c == quote => {
        out.push('\\');
        out.push(c);
      },
      c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
      c => out.push(c),
    }
  }
  out.push(quote);
  out
}
