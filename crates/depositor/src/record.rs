//! Records flowing through the pipeline.
//!
//! An [`InputRecord`] names a report page and the DOI to register for it. The report
//! scraper turns it into a [`ReportRecord`], which is then consumed unchanged by both
//! the Crossref builder and the audit emitter.

use super::*;

/// A report page to register, paired with the DOI it should receive.
///
/// Both fields are carried through to every output byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
  /// Public URL of the report page
  pub url: String,
  /// DOI to register for the page
  pub doi: String,
}

impl InputRecord {
  /// Creates a new input record.
  pub fn new(url: impl Into<String>, doi: impl Into<String>) -> Self {
    Self { url: url.into(), doi: doi.into() }
  }
}

/// A single author as listed on a report page.
///
/// # Examples
///
/// ```
/// use depositor::record::AuthorRecord;
///
/// let author = AuthorRecord::from_full_name("Jane Q. Doe", None, "The Open Data Institute");
/// assert_eq!(author.given_name, "Jane Q.");
/// assert_eq!(author.family_name, "Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
  /// Everything before the last name token, single-space joined; may be empty
  pub given_name:  String,
  /// The last name token, or the whole name if it is a single token
  pub family_name: String,
  /// Canonical `https://orcid.org/XXXX-XXXX-XXXX-XXXX` identifier, if one was found
  pub orcid:       Option<String>,
  /// Institution the author is credited under
  pub affiliation: String,
}

impl AuthorRecord {
  /// Builds an author from a display name, splitting it into given and family parts.
  pub fn from_full_name(
    full_name: &str,
    orcid: Option<String>,
    affiliation: impl Into<String>,
  ) -> Self {
    let (given_name, family_name) = split_name(full_name);
    Self { given_name, family_name, orcid, affiliation: affiliation.into() }
  }
}

/// Everything scraped for one report.
///
/// The author list keeps the order the page lists them in; index 0 is the first author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
  /// DOI from the input record
  pub doi:              String,
  /// Page URL from the input record
  pub url:              String,
  /// Page heading, or [`UNKNOWN_TITLE`] if the page had none
  pub title:            String,
  /// Machine-readable publication date, if the page carried one
  pub publication_date: Option<NaiveDate>,
  /// Authors in page order
  pub authors:          Vec<AuthorRecord>,
}

/// Title used when a report page has no recognizable heading.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Splits a display name into `(given, family)`.
///
/// Multiple whitespace-separated tokens: the last is the family name and the rest,
/// joined with single spaces, the given name. A single token is all family name.
pub fn split_name(full_name: &str) -> (String, String) {
  let tokens: Vec<&str> = full_name.split_whitespace().collect();
  match tokens.split_last() {
    Some((family, given)) if !given.is_empty() => (given.join(" "), (*family).to_string()),
    _ => (String::new(), full_name.trim().to_string()),
  }
}
