//! Node-or-absent queries over parsed HTML.
//!
//! Scraped pages are never trusted to have a particular shape, so this layer only offers
//! lookups that return `Option` (one node) or a possibly empty `Vec` (many nodes).
//! Callers branch explicitly on every result.
//!
//! A [`Document`] is not `Send`. Extract owned values from it before awaiting anything.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
pub struct Document {
  /// Underlying DOM
  html: Html,
}

impl Document {
  /// Parses raw response bytes. Invalid UTF-8 is replaced rather than rejected, and the
  /// HTML parser itself never fails.
  pub fn parse(bytes: &[u8]) -> Self {
    Self { html: Html::parse_document(&String::from_utf8_lossy(bytes)) }
  }

  /// First node in document order matching `selector`.
  pub fn select_first(&self, selector: &Selector) -> Option<Node<'_>> {
    self.html.select(selector).next().map(Node)
  }

  /// All nodes matching `selector`, in document order.
  pub fn select_all(&self, selector: &Selector) -> Vec<Node<'_>> {
    self.html.select(selector).map(Node).collect()
  }
}

/// An element within a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
  /// First descendant matching `selector`.
  pub fn select_first(&self, selector: &Selector) -> Option<Node<'a>> {
    self.0.select(selector).next().map(Node)
  }

  /// Visible text: each text fragment trimmed, blanks dropped, the rest concatenated.
  pub fn text(&self) -> String {
    self.0.text().map(str::trim).filter(|fragment| !fragment.is_empty()).collect()
  }

  /// Value of attribute `name`, if present.
  pub fn attr(&self, name: &str) -> Option<&'a str> { self.0.value().attr(name) }
}
