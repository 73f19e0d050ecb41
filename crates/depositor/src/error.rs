//! Error types for the depositor library.
//!
//! Most failures during scraping never reach the caller: a failed report fetch drops
//! that report and a failed profile fetch drops that author's ORCID. The variants here
//! carry the reason up to those boundaries, where they are logged, and propagate as
//! ordinary errors everywhere else (configuration, serialization, writing output).
//!
//! # Examples
//!
//! ```
//! use depositor::error::DepositorError;
//!
//! let err = DepositorError::HttpStatus { url: "https://theodi.org/x/".into(), status: 404 };
//! assert_eq!(err.to_string(), "GET https://theodi.org/x/ returned HTTP 404");
//! ```

use thiserror::Error;

/// Error type alias used for the [`depositor`](crate) crate.
pub type Result<T> = core::result::Result<T, DepositorError>;

/// Errors that can occur while scraping reports or producing a deposit.
#[derive(Error, Debug)]
pub enum DepositorError {
  /// A network request failed before a response was received.
  ///
  /// This covers DNS failures, refused connections, TLS errors and body read errors.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The remote host answered, but not with `200 OK`.
  #[error("GET {url} returned HTTP {status}")]
  HttpStatus {
    /// The URL that was requested
    url:    String,
    /// The status code that came back
    status: u16,
  },

  /// A fetched page is missing an element the record cannot be built without.
  #[error("Malformed page: {0}")]
  Extraction(String),

  /// Writing the XML batch failed.
  #[error(transparent)]
  Xml(#[from] quick_xml::Error),

  /// Writing the audit CSV failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A file system operation failed.
  ///
  /// This is the failure mode for writing the output files, and the only one that
  /// aborts a whole run.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Serialized output was not valid UTF-8.
  #[error(transparent)]
  Utf8(#[from] std::string::FromUtf8Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be rendered as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The configuration is structurally valid but unusable.
  #[error("{0}")]
  Config(String),
}
