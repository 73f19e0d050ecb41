//! Run configuration.
//!
//! Everything that varies between deposits lives here: depositor credentials, the
//! publisher site being scraped, the throttle between profile lookups, and the ordered
//! list of reports to register. [`Config::default`] carries the built-in values; a TOML
//! file with the same shape can override any of them.
//!
//! # Example
//!
//! ```toml
//! batch_prefix = "ODI_Deposit"
//! throttle_ms = 500
//!
//! [depositor]
//! name = "Neil Majithia (ODI)"
//! email = "neil.majithia@theodi.org"
//! registrant = "Neil Majithia (ODI)"
//!
//! [site]
//! origin = "https://theodi.org"
//! domain = "theodi.org"
//! institution = "The Open Data Institute"
//!
//! [[records]]
//! url = "https://theodi.org/insights/reports/a-framework-for-ai-ready-data/"
//! doi = "10.61557/ODEX6433"
//! ```

use super::*;

/// Delay inserted before every author profile request.
pub const DEFAULT_THROTTLE_MS: u64 = 500;

/// Reports registered when no configuration file supplies its own list.
const DEFAULT_RECORDS: &[(&str, &str)] = &[
  (
    "https://theodi.org/insights/reports/how-an-ai-ready-national-data-library-would-help-uk-science/",
    "10.61557/ODZD4015",
  ),
  (
    "https://theodi.org/insights/reports/trust-and-transparency-in-privacy-enhancing-technologies/",
    "10.61557/ASKZ9013",
  ),
  (
    "https://theodi.org/insights/reports/mapping-the-role-of-data-work-in-ai-supply-chains/",
    "10.61557/ZRSB9894",
  ),
  ("https://theodi.org/insights/reports/a-framework-for-ai-ready-data/", "10.61557/ODEX6433"),
  (
    "https://theodi.org/insights/reports/data-infrastructure-for-a-healthy-nation/",
    "10.61557/JULR4284",
  ),
  (
    "https://theodi.org/insights/reports/an-odi-european-data-and-ai-policy-manifesto/",
    "10.61557/LPXQ8240",
  ),
  (
    "https://theodi.org/insights/reports/towards-the-ethical-use-of-synthetic-data-in-health-research/",
    "10.61557/MAHO3973",
  ),
  (
    "https://theodi.org/insights/reports/shared-data-licensing-across-the-uks-energy-networks/",
    "10.61557/XVYL3760",
  ),
  (
    "https://theodi.org/insights/reports/insights-from-uk-councils-on-standards-readiness-and-reform-to-modernise-public-data-for-ai/",
    "10.61557/LURR7702",
  ),
  (
    "https://theodi.org/insights/projects/odi-and-cocoda-technolegal-solutions-for-online-platform-accountability/",
    "10.61557/QYTA5086",
  ),
  (
    "https://theodi.org/insights/reports/an-open-data-strategy-for-the-water-industry/",
    "10.61557/IGPR2799",
  ),
  ("https://theodi.org/insights/projects/open-data-use-case-observatory/", "10.61557/AWBG3088"),
];

/// Complete configuration for one deposit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Prefix of the generated batch id; a minute-resolution timestamp is appended
  pub batch_prefix: String,
  /// Milliseconds to wait before each author profile request
  pub throttle_ms:  u64,
  /// Credentials written into the batch head
  pub depositor:    Depositor,
  /// The publisher site reports are scraped from
  pub site:         Site,
  /// Reports to register, in deposit order
  pub records:      Vec<InputRecord>,
}

/// Who is submitting the deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Depositor {
  /// `depositor_name` in the batch head
  pub name:       String,
  /// `email_address` in the batch head
  pub email:      String,
  /// `registrant` in the batch head
  pub registrant: String,
}

/// The single publisher site being scraped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
  /// Scheme and host that relative links are resolved against
  pub origin:      String,
  /// Author links containing this are followed for ORCID lookups; all others are not
  pub domain:      String,
  /// Affiliation credited to every author
  pub institution: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      batch_prefix: "ODI_Deposit".to_string(),
      throttle_ms:  DEFAULT_THROTTLE_MS,
      depositor:    Depositor::default(),
      site:         Site::default(),
      records:      DEFAULT_RECORDS.iter().map(|(url, doi)| InputRecord::new(*url, *doi)).collect(),
    }
  }
}

impl Default for Depositor {
  fn default() -> Self {
    Self {
      name:       "Neil Majithia (ODI)".to_string(),
      email:      "neil.majithia@theodi.org".to_string(),
      registrant: "Neil Majithia (ODI)".to_string(),
    }
  }
}

impl Default for Site {
  fn default() -> Self {
    Self {
      origin:      "https://theodi.org".to_string(),
      domain:      "theodi.org".to_string(),
      institution: "The Open Data Institute".to_string(),
    }
  }
}

impl Config {
  /// Platform config location: `<config dir>/depositor/config.toml`, falling back to the
  /// current directory when the platform has no config dir.
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("depositor").join("config.toml")
  }

  /// Parses a TOML document. Missing keys keep their defaults.
  pub fn from_toml_str(toml_str: &str) -> Result<Self> { Ok(toml::from_str(toml_str)?) }

  /// Reads and parses a TOML file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    Self::from_toml_str(&std::fs::read_to_string(path)?)
  }

  /// Renders the configuration as TOML, suitable for [`Config::from_file`].
  pub fn to_toml_string(&self) -> Result<String> { Ok(toml::to_string_pretty(self)?) }

  /// The profile throttle as a [`Duration`].
  pub fn throttle(&self) -> Duration { Duration::from_millis(self.throttle_ms) }

  /// Checks everything the batch head and the scrapers rely on being non-empty.
  ///
  /// An empty record list is allowed and produces an empty batch.
  pub fn validate(&self) -> Result<()> {
    let required = [
      ("batch_prefix", &self.batch_prefix),
      ("depositor.name", &self.depositor.name),
      ("depositor.email", &self.depositor.email),
      ("depositor.registrant", &self.depositor.registrant),
      ("site.origin", &self.site.origin),
      ("site.domain", &self.site.domain),
      ("site.institution", &self.site.institution),
    ];
    if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
      return Err(DepositorError::Config(format!("`{key}` must not be empty")));
    }

    for (index, record) in self.records.iter().enumerate() {
      if record.url.trim().is_empty() || record.doi.trim().is_empty() {
        return Err(DepositorError::Config(format!(
          "record #{} needs both a url and a doi (got url = {:?}, doi = {:?})",
          index + 1,
          record.url,
          record.doi
        )));
      }
    }
    Ok(())
  }
}

impl Site {
  /// Makes a site-relative link (one starting with `/`) absolute; anything else is
  /// returned as-is.
  pub fn resolve_link(&self, href: &str) -> String {
    if href.starts_with('/') {
      format!("{}{}", self.origin.trim_end_matches('/'), href)
    } else {
      href.to_string()
    }
  }

  /// Whether `link` points at this site and may be followed for an ORCID lookup.
  pub fn is_own_link(&self, link: &str) -> bool { link.contains(&self.domain) }
}
