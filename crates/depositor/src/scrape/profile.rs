//! Author profile page extraction.

use super::*;

lazy_static! {
  static ref PROFILE_ORCID: Selector =
    Selector::parse(".profile-block__orcid a").expect("valid selector");
}

/// Pulls the normalized ORCID out of a profile page body, if the page links to one.
pub fn parse_profile_page(body: &[u8]) -> Option<String> {
  let doc = Document::parse(body);
  let href = doc.select_first(&PROFILE_ORCID)?.attr("href");
  normalize_orcid(href)
}
