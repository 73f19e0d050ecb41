//! Report metadata scraping and Crossref deposit generation.
//!
//! `depositor` turns a list of published report pages into a Crossref DOI registration
//! batch. It provides:
//!
//! - Report page scraping (title, publication date, ordered authors)
//! - Author profile scraping for ORCID identifiers
//! - ORCID normalization into the canonical `https://orcid.org/...` form
//! - A strictly ordered Crossref `doi_batch` XML builder
//! - A flat CSV audit of everything that went into the batch
//!
//! # Getting Started
//!
//! ```no_run
//! use depositor::{
//!   batch::{run_batch, BatchId},
//!   client::HttpFetcher,
//!   config::Config,
//!   deposit::Deposit,
//!   scrape::Scraper,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::default();
//!   let scraper = Scraper::new(HttpFetcher::new()?, config.site.clone())
//!     .with_throttle(config.throttle());
//!
//!   // Scrape every configured report, in order, skipping failures
//!   let reports = run_batch(&scraper, &config.records).await;
//!
//!   // Write `<batch id>.xml` and `<batch id>_audit.csv`
//!   let now = chrono::Local::now().naive_local();
//!   let deposit = Deposit::new(&config, BatchId::generate(&config.batch_prefix, now), now, reports);
//!   let files = deposit.write_to(".")?;
//!   println!("Wrote {}", files.xml.display());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`orcid`]: ORCID identifier normalization
//! - [`client`]: HTTP transport seam
//! - [`html`]: Minimal node-or-absent query layer over parsed HTML
//! - [`scrape`]: Report and author profile scrapers
//! - [`batch`]: Sequential batch orchestration and batch identifiers
//! - [`crossref`]: Crossref XML batch builder
//! - [`audit`]: CSV audit emitter
//! - [`deposit`]: Output assembly and file writing
//! - [`config`]: TOML configuration, credentials and the record list

#![warn(missing_docs)]

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod audit;
pub mod batch;
pub mod client;
pub mod config;
pub mod crossref;
pub mod deposit;
pub mod error;
pub mod html;
pub mod orcid;
pub mod record;
pub mod scrape;

use crate::{client::*, error::*, record::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use depositor::prelude::*;
///
/// fn example() -> Result<(), DepositorError> {
///   let orcid = normalize_orcid(Some("orcid.org/0000-0002-1825-0097"));
///   assert!(orcid.is_some());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    client::Fetcher,
    error::DepositorError,
    orcid::normalize_orcid,
    record::{AuthorRecord, InputRecord, ReportRecord},
  };
}
