//! Report and author profile scraping.
//!
//! A [`Scraper`] makes one GET per report page and, for every author linked to a profile
//! on the publisher's own site, one throttled GET per profile page. All requests are
//! awaited one after another.
//!
//! Failures stay local:
//!
//! - a report that cannot be fetched, does not come back `200 OK`, or lists an author
//!   with no name, yields no record;
//! - a profile that cannot be fetched yields no ORCID for that author only;
//! - a missing heading or date degrades to a sentinel title or no date.
//!
//! Each fallible step has a `try_*` form returning [`Result`] so the reason is available
//! to callers and tests; the plain forms log the reason and return `None`.
//!
//! # Examples
//!
//! ```no_run
//! use depositor::{client::HttpFetcher, config::Site, scrape::Scraper};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scraper = Scraper::new(HttpFetcher::new()?, Site::default());
//! if let Some(report) = scraper
//!   .fetch_report("https://theodi.org/insights/reports/a-framework-for-ai-ready-data/", "10.61557/ODEX6433")
//!   .await
//! {
//!   println!("{} has {} authors", report.title, report.authors.len());
//! }
//! # Ok(())
//! # }
//! ```

use scraper::Selector;

use super::*;
use crate::{config::Site, html::Document, orcid::normalize_orcid};

pub mod profile;
pub mod report;

pub use profile::parse_profile_page;
pub use report::{parse_report_page, AuthorEntry, ReportPage};

/// Scrapes report pages and author profiles from a single site.
#[derive(Debug, Clone)]
pub struct Scraper<F> {
  /// Transport used for every request
  fetcher:  F,
  /// The site being scraped
  site:     Site,
  /// Pause before each profile request
  throttle: Duration,
}

impl<F: Fetcher> Scraper<F> {
  /// Creates a scraper with the default profile throttle.
  pub fn new(fetcher: F, site: Site) -> Self {
    Self { fetcher, site, throttle: Duration::from_millis(config::DEFAULT_THROTTLE_MS) }
  }

  /// Sets the pause inserted before each profile request.
  pub fn with_throttle(mut self, throttle: Duration) -> Self {
    self.throttle = throttle;
    self
  }

  /// The transport this scraper issues requests through.
  pub fn fetcher(&self) -> &F { &self.fetcher }

  /// Looks up the ORCID linked from an author profile page.
  ///
  /// Returns `None` when the page is unreachable, is not `200 OK`, or has no usable
  /// ORCID link. Transport failures are logged.
  pub async fn fetch_orcid(&self, profile_url: &str) -> Option<String> {
    debug!("Checking profile: {}", profile_url);
    match self.try_fetch_orcid(profile_url).await {
      Ok(orcid) => orcid,
      Err(e) => {
        warn!("Error fetching ORCID from {}: {}", profile_url, e);
        None
      },
    }
  }

  /// Like [`Scraper::fetch_orcid`], but surfaces transport failures.
  ///
  /// A non-success status is not an error here; it is simply "no ORCID".
  pub async fn try_fetch_orcid(&self, profile_url: &str) -> Result<Option<String>> {
    if !self.throttle.is_zero() {
      tokio::time::sleep(self.throttle).await;
    }

    let page = self.fetcher.get(profile_url).await?;
    if !page.is_success() {
      debug!("Profile {} returned HTTP {}", profile_url, page.status);
      return Ok(None);
    }
    Ok(parse_profile_page(&page.body))
  }

  /// Scrapes one report page into a [`ReportRecord`].
  ///
  /// Returns `None`, after logging why, when the page cannot be fetched, does not come
  /// back `200 OK`, or has an author entry without a name. A missing title or date
  /// degrades the record instead of dropping it.
  pub async fn fetch_report(&self, url: &str, doi: &str) -> Option<ReportRecord> {
    info!("Processing: {}", url);
    match self.try_fetch_report(url, doi).await {
      Ok(report) => Some(report),
      Err(e) => {
        warn!("Skipping {} ({}): {}", url, doi, e);
        None
      },
    }
  }

  /// Like [`Scraper::fetch_report`], but surfaces why a report was dropped.
  pub async fn try_fetch_report(&self, url: &str, doi: &str) -> Result<ReportRecord> {
    let page = self.fetcher.get(url).await?.require_success(url)?;
    let ReportPage { title, publication_date, authors: entries } =
      parse_report_page(&page.body, &self.site)?;

    let mut authors = Vec::with_capacity(entries.len());
    for entry in entries {
      let orcid = match entry.profile_link.as_deref() {
        Some(link) if self.site.is_own_link(link) => self.fetch_orcid(link).await,
        _ => None,
      };
      authors.push(AuthorRecord::from_full_name(&entry.full_name, orcid, &self.site.institution));
    }

    Ok(ReportRecord {
      doi: doi.to_string(),
      url: url.to_string(),
      title,
      publication_date,
      authors,
    })
  }
}
