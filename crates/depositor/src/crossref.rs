//! Crossref `doi_batch` XML builder.
//!
//! Crossref validates deposits against an XSD that fixes the order of child elements.
//! A document with the right content in the wrong order is rejected by the deposit
//! service, not by anything local, so the order is encoded here once, in the shape of
//! the writer functions:
//!
//! ```text
//! doi_batch
//! ├─ head: doi_batch_id, timestamp, depositor(depositor_name, email_address), registrant
//! └─ body
//!    └─ report-paper / report-paper_metadata   (one per report, input order)
//!       ├─ contributors                          (only if there are authors)
//!       │  └─ person_name[sequence]              (first, then additional)
//!       │     ├─ given_name
//!       │     ├─ surname
//!       │     ├─ affiliations / institution / institution_name
//!       │     └─ ORCID                           (only if known)
//!       ├─ titles / title
//!       ├─ publication_date: month, day, year    (only if known)
//!       └─ doi_data: doi, resource
//! ```

use quick_xml::{
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
  Writer,
};

use super::*;

/// Crossref schema version declared on the root element.
pub const SCHEMA_VERSION: &str = "5.3.1";
/// Crossref schema namespace.
pub const NAMESPACE: &str = "http://www.crossref.org/schema/5.3.1";
/// XML Schema instance namespace.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// `xsi:schemaLocation` pairing the namespace with its XSD.
pub const SCHEMA_LOCATION: &str =
  "http://www.crossref.org/schema/5.3.1 http://www.crossref.org/schemas/crossref5.3.1.xsd";

/// The `head` block of a deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
  /// `doi_batch_id`
  pub batch_id:        String,
  /// `timestamp`, `YYYYMMDDHHMMSS`
  pub timestamp:       String,
  /// `depositor/depositor_name`
  pub depositor_name:  String,
  /// `depositor/email_address`
  pub depositor_email: String,
  /// `registrant`
  pub registrant:      String,
}

/// Builds the complete, indented `doi_batch` document for `reports`.
///
/// One `report-paper` is written per report, in the order given.
///
/// # Examples
///
/// ```
/// use depositor::{crossref::{build_batch, Head}, record::ReportRecord};
///
/// let head = Head {
///   batch_id:        "ODI_Deposit_202403051407".into(),
///   timestamp:       "20240305140701".into(),
///   depositor_name:  "Depositor".into(),
///   depositor_email: "depositor@example.org".into(),
///   registrant:      "Registrant".into(),
/// };
/// let report = ReportRecord {
///   doi:              "10.61557/TEST0001".into(),
///   url:              "https://theodi.org/insights/reports/example/".into(),
///   title:            "Example Report".into(),
///   publication_date: None,
///   authors:          vec![],
/// };
///
/// let xml = build_batch(&head, &[report]).unwrap();
/// assert!(xml.contains("<doi>10.61557/TEST0001</doi>"));
/// assert!(!xml.contains("<contributors>"));
/// ```
pub fn build_batch(head: &Head, reports: &[ReportRecord]) -> Result<String> {
  let mut xml = XmlEmitter::new();
  xml.declaration()?;

  xml.open("doi_batch", &[
    ("version", SCHEMA_VERSION),
    ("xmlns", NAMESPACE),
    ("xmlns:xsi", XSI_NAMESPACE),
    ("xsi:schemaLocation", SCHEMA_LOCATION),
  ])?;
  write_head(&mut xml, head)?;

  xml.open("body", &[])?;
  for report in reports {
    write_report(&mut xml, report)?;
  }
  xml.close("body")?;

  xml.close("doi_batch")?;
  xml.finish()
}

fn write_head(xml: &mut XmlEmitter, head: &Head) -> Result<()> {
  xml.open("head", &[])?;
  xml.leaf("doi_batch_id", &head.batch_id)?;
  xml.leaf("timestamp", &head.timestamp)?;
  xml.open("depositor", &[])?;
  xml.leaf("depositor_name", &head.depositor_name)?;
  xml.leaf("email_address", &head.depositor_email)?;
  xml.close("depositor")?;
  xml.leaf("registrant", &head.registrant)?;
  xml.close("head")
}

fn write_report(xml: &mut XmlEmitter, report: &ReportRecord) -> Result<()> {
  trace!("Writing report-paper for {}", report.doi);
  xml.open("report-paper", &[])?;
  xml.open("report-paper_metadata", &[("language", "en")])?;

  if !report.authors.is_empty() {
    write_contributors(xml, &report.authors)?;
  }

  xml.open("titles", &[])?;
  xml.leaf("title", &report.title)?;
  xml.close("titles")?;

  if let Some(date) = report.publication_date {
    write_publication_date(xml, date)?;
  }

  xml.open("doi_data", &[])?;
  xml.leaf("doi", &report.doi)?;
  xml.leaf("resource", &report.url)?;
  xml.close("doi_data")?;

  xml.close("report-paper_metadata")?;
  xml.close("report-paper")
}

fn write_contributors(xml: &mut XmlEmitter, authors: &[AuthorRecord]) -> Result<()> {
  xml.open("contributors", &[])?;
  for (index, author) in authors.iter().enumerate() {
    let sequence = if index == 0 { "first" } else { "additional" };
    xml.open("person_name", &[("sequence", sequence), ("contributor_role", "author")])?;
    xml.leaf("given_name", &author.given_name)?;
    xml.leaf("surname", &author.family_name)?;

    // affiliations before ORCID
    xml.open("affiliations", &[])?;
    xml.open("institution", &[])?;
    xml.leaf("institution_name", &author.affiliation)?;
    xml.close("institution")?;
    xml.close("affiliations")?;

    if let Some(orcid) = &author.orcid {
      xml.leaf("ORCID", orcid)?;
    }
    xml.close("person_name")?;
  }
  xml.close("contributors")
}

fn write_publication_date(xml: &mut XmlEmitter, date: NaiveDate) -> Result<()> {
  xml.open("publication_date", &[("media_type", "online")])?;
  xml.leaf("month", &date.format("%m").to_string())?;
  xml.leaf("day", &date.format("%d").to_string())?;
  xml.leaf("year", &date.format("%Y").to_string())?;
  xml.close("publication_date")
}

/// Thin wrapper over an indenting [`Writer`] so the builders above read as a list of
/// elements.
struct XmlEmitter {
  /// Two-space indenting writer into memory
  writer: Writer<Vec<u8>>,
}

impl XmlEmitter {
  fn new() -> Self { Self { writer: Writer::new_with_indent(Vec::new(), b' ', 2) } }

  fn declaration(&mut self) -> Result<()> {
    self.writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(())
  }

  fn open(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    let mut start = BytesStart::new(name);
    start.extend_attributes(attributes.iter().copied());
    self.writer.write_event(Event::Start(start))?;
    Ok(())
  }

  fn close(&mut self, name: &str) -> Result<()> {
    self.writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
  }

  /// Element containing only text. Empty text is written as a self-closing element.
  fn leaf(&mut self, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
      self.writer.write_event(Event::Empty(BytesStart::new(name)))?;
      return Ok(());
    }
    self.open(name, &[])?;
    self.writer.write_event(Event::Text(BytesText::new(text)))?;
    self.close(name)
  }

  fn finish(self) -> Result<String> {
    let mut bytes = self.writer.into_inner();
    bytes.push(b'\n');
    Ok(String::from_utf8(bytes)?)
  }
}
