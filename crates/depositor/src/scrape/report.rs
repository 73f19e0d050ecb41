//! Report page extraction.

use super::*;

lazy_static! {
  static ref TITLE: Selector = Selector::parse("h1.header__title").expect("valid selector");
  static ref PUBLISHED: Selector = Selector::parse("time").expect("valid selector");
  static ref AUTHOR_ENTRIES: Selector =
    Selector::parse(".authors-list li").expect("valid selector");
  static ref LINKED_NAME: Selector =
    Selector::parse(".people-list__person-name a").expect("valid selector");
  static ref PLAIN_NAME: Selector =
    Selector::parse(".people-list__person-name").expect("valid selector");
  /// Four-digit year; month and day may drop their leading zero.
  static ref DATE_SHAPE: Regex =
    Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("date pattern is a valid regex");
}

/// Format of the `datetime` attribute on the publication `<time>` element.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything a report page yields before any author profile is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
  /// Heading text, or [`UNKNOWN_TITLE`]
  pub title:            String,
  /// Parsed publication date, if present and well formed
  pub publication_date: Option<NaiveDate>,
  /// Author entries in page order
  pub authors:          Vec<AuthorEntry>,
}

/// One entry of a report's author list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
  /// Visible name text
  pub full_name:    String,
  /// Absolute profile URL, when the name is linked
  pub profile_link: Option<String>,
}

/// Extracts title, date and author entries from a report page body.
///
/// A missing heading or date degrades to [`UNKNOWN_TITLE`] or `None`, and a missing
/// author list to no authors. An author entry with no name node at all fails the whole
/// page with [`DepositorError::Extraction`].
pub fn parse_report_page(body: &[u8], site: &Site) -> Result<ReportPage> {
  let doc = Document::parse(body);
  Ok(ReportPage {
    title:            extract_title(&doc),
    publication_date: extract_date(&doc),
    authors:          extract_authors(&doc, site)?,
  })
}

fn extract_title(doc: &Document) -> String {
  match doc.select_first(&TITLE) {
    Some(heading) => heading.text(),
    None => {
      debug!("No report heading found, using {:?}", UNKNOWN_TITLE);
      UNKNOWN_TITLE.to_string()
    },
  }
}

fn extract_date(doc: &Document) -> Option<NaiveDate> {
  let datetime = doc.select_first(&PUBLISHED)?.attr("datetime")?;
  if !DATE_SHAPE.is_match(datetime) {
    debug!("Ignoring publication date {:?}: not YYYY-MM-DD", datetime);
    return None;
  }
  match NaiveDate::parse_from_str(datetime, DATE_FORMAT) {
    Ok(date) => Some(date),
    Err(e) => {
      debug!("Ignoring publication date {:?}: {}", datetime, e);
      None
    },
  }
}

fn extract_authors(doc: &Document, site: &Site) -> Result<Vec<AuthorEntry>> {
  doc
    .select_all(&AUTHOR_ENTRIES)
    .iter()
    .enumerate()
    .map(|(index, entry)| {
      if let Some(link) = entry.select_first(&LINKED_NAME) {
        return Ok(AuthorEntry {
          full_name:    link.text(),
          profile_link: link.attr("href").map(|href| site.resolve_link(href)),
        });
      }
      match entry.select_first(&PLAIN_NAME) {
        Some(name) => Ok(AuthorEntry { full_name: name.text(), profile_link: None }),
        None => Err(DepositorError::Extraction(format!(
          "author entry {} has no name",
          index + 1
        ))),
      }
    })
    .collect()
}
