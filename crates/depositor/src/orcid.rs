//! ORCID identifier normalization.
//!
//! Profile pages link to ORCID records in many slightly different shapes: bare
//! identifiers, `http://` links, links to other ORCID hosts, and links with stray
//! characters typed after the identifier. [`normalize_orcid`] pulls the first
//! identifier-shaped substring out of any of these and rebuilds the canonical URL.

use super::*;

/// Host prefix every normalized identifier is rendered with.
pub const ORCID_PREFIX: &str = "https://orcid.org/";

lazy_static! {
  /// Four hyphenated groups of four; the final character may be the `X` checksum.
  static ref ORCID_PATTERN: Regex =
    Regex::new(r"(\d{4}-\d{4}-\d{4}-\d{3}[\dX])").expect("ORCID pattern is a valid regex");
}

/// Normalizes a raw ORCID string or URL into `https://orcid.org/XXXX-XXXX-XXXX-XXXX`.
///
/// Returns `None` for absent or empty input, or when nothing ORCID-shaped appears in
/// the text. This never fails.
///
/// # Examples
///
/// ```
/// use depositor::orcid::normalize_orcid;
///
/// assert_eq!(
///   normalize_orcid(Some("https://orcid.org/0000-0002-1825-0097v")).as_deref(),
///   Some("https://orcid.org/0000-0002-1825-0097")
/// );
/// assert_eq!(normalize_orcid(Some("")), None);
/// assert_eq!(normalize_orcid(None), None);
/// ```
pub fn normalize_orcid(raw: Option<&str>) -> Option<String> {
  let raw = raw.filter(|raw| !raw.is_empty())?;
  ORCID_PATTERN
    .captures(raw)
    .and_then(|cap| cap.get(1))
    .map(|id| format!("{ORCID_PREFIX}{}", id.as_str()))
}
