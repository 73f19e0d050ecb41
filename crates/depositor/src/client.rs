//! HTTP transport seam.
//!
//! The scrapers only need `GET url -> (status, body)`. [`Fetcher`] captures exactly that,
//! so the pipeline can run against [`HttpFetcher`] in production and an in-memory
//! implementation in tests.

use super::*;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A fetched HTTP response: status code and raw body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
  /// HTTP status code
  pub status: u16,
  /// Undecoded response body
  pub body:   Vec<u8>,
}

impl Page {
  /// Creates a page from a status and body.
  pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
    Self { status, body: body.into() }
  }

  /// Only `200 OK` counts as a usable page.
  pub fn is_success(&self) -> bool { self.status == 200 }

  /// Returns the page, or [`DepositorError::HttpStatus`] if it was not a success.
  pub fn require_success(self, url: &str) -> Result<Self> {
    if self.is_success() {
      Ok(self)
    } else {
      Err(DepositorError::HttpStatus { url: url.to_string(), status: self.status })
    }
  }
}

/// Anything that can perform a single HTTP GET.
///
/// Implementations must not retry; a failed request is final for the run.
///
/// ```no_run
/// # use depositor::{client::{Fetcher, HttpFetcher}, error::Result};
/// # async fn example() -> Result<()> {
/// let fetcher = HttpFetcher::new()?;
/// let page = fetcher.get("https://theodi.org/").await?;
/// println!("{} bytes, status {}", page.body.len(), page.status);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Fetcher: Send + Sync {
  /// Issues a GET for `url`.
  ///
  /// A non-success status is *not* an error at this layer; only transport failures are.
  async fn get(&self, url: &str) -> Result<Page>;
}

/// [`Fetcher`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  /// Connection-pooling client reused for every request of the run
  client: reqwest::Client,
}

impl HttpFetcher {
  /// Builds a client identifying itself with [`USER_AGENT`].
  pub fn new() -> Result<Self> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(Self { client })
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  async fn get(&self, url: &str) -> Result<Page> {
    let response = self.client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();
    trace!("GET {} -> {} ({} bytes)", url, status, body.len());
    Ok(Page { status, body })
  }
}
